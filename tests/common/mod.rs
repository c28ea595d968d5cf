use assert_cmd::Command;

pub fn mdtidy_cmd() -> Command {
    Command::cargo_bin("mdtidy").unwrap()
}
