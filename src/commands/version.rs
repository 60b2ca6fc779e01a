//! Version command implementation

/// Printed by `eugene version`
pub const VERSION_BANNER: &str = "Eugene 0.01";

pub fn execute() {
    println!("{}", VERSION_BANNER);
}
