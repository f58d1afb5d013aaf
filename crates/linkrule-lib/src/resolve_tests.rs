use linkrule_core::Variables;

use super::resolve;

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs.iter().copied().collect()
}

#[test]
fn file_uri_from_windows_path() {
    let vars = vars(&[("workspaceFolder", r"C:\Users\X")]);
    assert_eq!(
        resolve("file://${workspaceFolder}/a", &vars),
        "file:///C:/Users/X/a"
    );
}

#[test]
fn https_flips_separators_without_extra_slash() {
    let vars = vars(&[("workspaceFolder", r"C:\Users\X")]);
    assert_eq!(
        resolve("https://host/${workspaceFolder}/a", &vars),
        "https://host/C:/Users/X/a"
    );
}

#[test]
fn dollar_in_value_is_not_a_placeholder() {
    let vars = vars(&[("file", r"C:\$RECYCLE.BIN\temp")]);
    assert_eq!(
        resolve("file://${file}", &vars),
        "file:///C:/$RECYCLE.BIN/temp"
    );
}

#[test]
fn inserted_values_are_not_rescanned() {
    let vars = vars(&[("a", "${b}"), ("b", "nope")]);
    assert_eq!(resolve("${a}-${b}", &vars), "${b}-nope");
}

#[test]
fn native_path_keeps_backslashes() {
    let vars = vars(&[("dir", r"docs\api")]);
    assert_eq!(resolve(r"${dir}\index.md", &vars), r"docs\api\index.md");
}

#[test]
fn drive_letter_path_is_flipped() {
    let vars = vars(&[("file", r"D:\work\a.json")]);
    assert_eq!(resolve("${file}", &vars), "D:/work/a.json");
}

#[test]
fn classification_runs_on_whole_result() {
    let vars = vars(&[("v", r"a\b")]);
    assert_eq!(resolve(r"x\${v}", &vars), r"x\a\b");

    // `://` from a value flips separators across the whole result.
    let vars = Variables::from_iter([("v", r"see http://x\y")]);
    assert_eq!(resolve(r"p\${v}", &vars), "p/see http://x/y");
}

#[test]
fn unknown_and_unterminated_variables_stay() {
    let vars = vars(&[("a", "1")]);
    assert_eq!(resolve("${a}${missing}${a", &vars), "1${missing}${a");
    assert_eq!(resolve("$a {a} $", &vars), "$a {a} $");
}

#[test]
fn canonical_file_uri_untouched() {
    let vars = Variables::new();
    assert_eq!(resolve("file:///tmp/x", &vars), "file:///tmp/x");
    assert_eq!(resolve("file://", &vars), "file:///");
}

#[test]
fn file_uri_with_posix_path() {
    let vars = vars(&[("file", "/home/me/a.json")]);
    assert_eq!(resolve("file://${file}", &vars), "file:///home/me/a.json");
}

#[test]
fn non_ascii_values() {
    let vars = vars(&[("name", "日本語 😀")]);
    assert_eq!(resolve("https://x/${name}", &vars), "https://x/日本語 😀");
}
