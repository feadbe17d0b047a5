use splay_cli::{Dispatcher, Response};
use splay_tree::Key;

fn session(input: &str) -> String {
    let mut dispatcher = Dispatcher::new();
    let mut out = Vec::new();
    dispatcher.run(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn search_splays_found_node_matrix() {
    let mut dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.execute("add 5 x"), Response::Silent);
    assert_eq!(dispatcher.execute("add 3 y"), Response::Silent);
    assert_eq!(dispatcher.execute("add 8 z"), Response::Silent);
    assert_eq!(dispatcher.execute("search 3"), Response::Found("y".into()));
    assert_eq!(dispatcher.tree().root_key(), Some(&Key::from(3)));
}

#[test]
fn delete_on_empty_tree_matrix() {
    let mut dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.execute("delete 10"), Response::Error);
    assert!(dispatcher.tree().is_empty());
    assert_eq!(dispatcher.execute("print"), Response::Levels("_".into()));
}

#[test]
fn duplicate_add_keeps_first_value_matrix() {
    assert_eq!(session("add 1 a\nadd 1 b\nsearch 1\n"), "error\n1 a\n");
}

#[test]
fn print_single_root_matrix() {
    assert_eq!(session("add 5 v\nprint\n"), "[5 v]\n");
}

#[test]
fn failures_render_as_error_matrix() {
    let out = session("min\nmax\nset 1 x\ndelete 1\nfoo\n\nadd\nsearch x\n");
    assert_eq!(out, "error\n".repeat(8));
}

#[test]
fn search_miss_is_not_an_error_matrix() {
    assert_eq!(session("search 1\nadd 2 b\nsearch 1\n"), "0\n0\n");
}

#[test]
fn large_keys_matrix() {
    let out = session(
        "add 99999999999999999999 a\n\
         add 5 b\n\
         add 100000000000000000000 c\n\
         min\n\
         max\n\
         print\n",
    );
    assert_eq!(
        out,
        "5 b\n\
         100000000000000000000 c\n\
         [100000000000000000000 c]\n\
         [99999999999999999999 a 100000000000000000000] _\n\
         [5 b 99999999999999999999] _ _ _\n"
    );
}

#[test]
fn delete_paths_matrix() {
    let out = session(
        "add 5 x\n\
         add 3 y\n\
         add 8 z\n\
         search 3\n\
         print\n\
         delete 3\n\
         print\n\
         max\n\
         delete 8\n\
         delete 5\n\
         print\n\
         min\n",
    );
    assert_eq!(
        out,
        "1 y\n\
         [3 y]\n\
         _ [5 x 3]\n\
         _ _ _ [8 z 5]\n\
         [5 x]\n\
         _ [8 z 5]\n\
         8 z\n\
         _\n\
         error\n"
    );
}

#[test]
fn full_session_matrix() {
    let input = "add 8 10\n\
                 add 4 14\n\
                 add 7 15\n\
                 set 8 11\n\
                 add 3 13\n\
                 add 5 16\n\
                 search 88\n\
                 search 7\n\
                 delete 5\n\
                 print\n\
                 add 100000000000000000000 big\n\
                 add -5 neg\n\
                 min\n\
                 max\n\
                 print\n\
                 delete 7\n\
                 print\n\
                 set 42 x\n\
                 search 4\n\
                 add 1 a\n\
                 add 1 b\n\
                 search 1\n\
                 foo\n\
                 \n\
                 add 007 z\n\
                 search 7\n\
                 print\n";
    let expected = "0\n\
                    1 15\n\
                    [4 14]\n\
                    [3 13 4] [7 15 4]\n\
                    _ _ _ [8 11 7]\n\
                    -5 neg\n\
                    100000000000000000000 big\n\
                    [100000000000000000000 big]\n\
                    [-5 neg 100000000000000000000] _\n\
                    _ [3 13 -5] _ _\n\
                    _ _ _ [4 14 3] _ _ _ _\n\
                    _ _ _ _ _ _ _ [8 11 4] _ _ _ _ _ _ _ _\n\
                    _ _ _ _ _ _ _ _ _ _ _ _ _ _ [7 15 8] _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _\n\
                    [4 14]\n\
                    [3 13 4] [100000000000000000000 big 4]\n\
                    [-5 neg 3] _ [8 11 100000000000000000000] _\n\
                    error\n\
                    1 14\n\
                    error\n\
                    1 a\n\
                    error\n\
                    error\n\
                    1 z\n\
                    [7 z]\n\
                    [1 a 7] [8 11 7]\n\
                    [-5 neg 1] [4 14 1] _ [100000000000000000000 big 8]\n\
                    _ _ [3 13 4] _ _ _ _ _\n";

    let mut dispatcher = Dispatcher::new();
    let mut out = Vec::new();
    let processed = dispatcher.run(input.as_bytes(), &mut out).unwrap();
    assert_eq!(processed, 27);
    assert_eq!(String::from_utf8(out).unwrap(), expected);
    dispatcher.tree().assert_valid().unwrap();
}

#[test]
fn crlf_and_missing_final_newline_matrix() {
    assert_eq!(session("add 1 a\r\nsearch 1\r\nsearch 1"), "1 a\n1 a\n");
}

#[test]
fn invalid_utf8_line_is_an_error_matrix() {
    let mut dispatcher = Dispatcher::new();
    let mut out = Vec::new();
    let input: &[u8] = b"add 1 \xff\nmin\n";
    dispatcher.run(input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "error\nerror\n");
}

#[test]
fn empty_value_is_an_error_matrix() {
    assert_eq!(session("add 5 \nsearch 5\n"), "error\n0\n");
    assert_eq!(session("add 5 x\nset 5 \nsearch 5\n"), "error\n1 x\n");
}

#[test]
fn whitespace_only_value_matrix() {
    assert_eq!(session("add 5   \nsearch 5\n"), "1   \n");
}

#[test]
fn lone_carriage_return_ends_a_line_matrix() {
    let mut dispatcher = Dispatcher::new();
    let mut out = Vec::new();
    let processed = dispatcher
        .run(&b"add 1 a\radd 2 b\nprint\n"[..], &mut out)
        .unwrap();
    assert_eq!(processed, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "[2 b]\n[1 a 2] _\n");
}

#[test]
fn ecmascript_whitespace_matrix() {
    assert_eq!(session("add 1 \u{FEFF}x\nsearch 1\n"), "1 x\n");
    assert_eq!(session("add 1 x\u{2028}y\nsearch 1\n"), "error\n0\n");
}
