use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub const CHAPTER_ONE: &str = "In a hole in the ground there lived a Hobbit. \
    The Hobbit was called Bilbo. One day Gandalf came by. \
    Bilbo did not know Gandalf well.";

pub const CHAPTER_TWO: &str = "Later the Dwarves arrived. Thorin led the Dwarves to Bilbo. \
    They spoke of Erebor and the dragon. Erebor was far away, said Thorin.";

pub const COMMON_WORDS: &str = "in\na\nhole\nthe\nground\nthere\nlived\nwas\ncalled\none\nday\n\
    came\nby\ndid\nnot\nknow\nwell\nlater\narrived\nled\nto\nthey\nspoke\nof\nand\n\
    dragon\nfar\naway\nsaid\n";

/// A namesake command isolated from user-level configuration
pub fn namesake(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("namesake");
    cmd.env("NAMESAKE_CONFIG_DIR", root.join(".config"))
        .env_remove("NAMESAKE_CONFIG")
        .env_remove("NAMESAKE_CATALOG_URL")
        .env_remove("RUST_LOG")
        .env_remove("NAMESAKE_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

/// Lay out a two-chapter book plus a local word list under `root`
#[allow(dead_code)]
pub fn write_book(root: &Path) {
    let book = root.join("hobbit-chapters");
    fs::create_dir_all(&book).unwrap();
    fs::write(book.join("1.txt"), CHAPTER_ONE).unwrap();
    fs::write(book.join("2.txt"), CHAPTER_TWO).unwrap();
    fs::write(root.join("english_words.txt"), COMMON_WORDS).unwrap();
}
