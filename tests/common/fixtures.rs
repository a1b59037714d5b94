//! Test fixtures - reusable file contents for tests.

/// Five plain lines
pub const FIVE_LINES: &str = "alpha\nbravo\ncharlie\ndelta\necho\n";

/// The smallest well-formed conflict
pub const SIMPLE_CONFLICT: &str = "<<<<<<<\nA\n=======\nB\n>>>>>>>\n";

/// A git-style conflict with context around it
pub const GIT_CONFLICT: &str = r#"fn greet() {
<<<<<<< HEAD
    println!("hello");
=======
    println!("hi there");
>>>>>>> feature/greeting
}
"#;

/// `GIT_CONFLICT` after resolving
pub const GIT_CONFLICT_RESOLVED: &str = r#"fn greet() {
    println!("hello");
}
"#;

/// Two blocks back to back
pub const TWO_CONFLICTS: &str = "\
[package]
<<<<<<< HEAD
name = \"ours\"
=======
name = \"theirs\"
>>>>>>> main
version = \"0.1.0\"
<<<<<<< HEAD
edition = \"2021\"
=======
edition = \"2018\"
>>>>>>> main
";

/// `TWO_CONFLICTS` after resolving
pub const TWO_CONFLICTS_RESOLVED: &str = "\
[package]
name = \"ours\"
version = \"0.1.0\"
edition = \"2021\"
";

/// Start marker that is never closed
pub const UNTERMINATED: &str = "keep\n<<<<<<< HEAD\nlocal one\nlocal two\n";
