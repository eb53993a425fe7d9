use std::fs;

use fwtools::hooks::{Action, CPPLINT_ARGS, count_lintable_files, cpplint_command, pre_action};

#[test]
fn test_cpplint_args_fixed() {
    assert!(CPPLINT_ARGS.contains(&"--filter=-build/include_subdir,-runtime/int"));
    assert!(CPPLINT_ARGS.contains(&"--recursive"));
    assert!(CPPLINT_ARGS.contains(&"src/*"));
    assert!(CPPLINT_ARGS.contains(&"include/*"));
}

#[test]
fn test_cpplint_command_program() {
    let cmd = cpplint_command();
    assert_eq!(cmd.get_program(), "cpplint");
    let args: Vec<_> = cmd.get_args().collect();
    assert_eq!(args.len(), CPPLINT_ARGS.len());
}

#[test]
fn test_bluetooth_object_registers_lint() {
    assert_eq!(pre_action("bluetooth.cpp.o"), Some(Action::Cpplint));
}

#[test]
fn test_unknown_target_has_no_action() {
    assert_eq!(pre_action("main.cpp.o"), None);
    assert_eq!(pre_action(""), None);
}

#[test]
fn test_count_lintable_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join("include")).unwrap();
    fs::write(dir.path().join("src/bluetooth.cpp"), "").unwrap();
    fs::write(dir.path().join("src/config.cpp"), "").unwrap();
    fs::write(dir.path().join("src/notes.md"), "").unwrap();
    fs::write(dir.path().join("include/data.h"), "").unwrap();

    assert_eq!(count_lintable_files(dir.path()).unwrap(), 3);
}

#[test]
fn test_count_lintable_files_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    let err = count_lintable_files(dir.path()).unwrap_err();
    assert!(err.to_string().contains("include"));
}
