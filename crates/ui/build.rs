//! Build script for compiling Slint UI files.

#![allow(clippy::expect_used)]

fn main() {
    slint_build::compile("src/ui/app.slint").expect("Slint compilation failed");
}
