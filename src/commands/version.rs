//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("{}", text());
    Ok(())
}

fn text() -> String {
    format!("jsm {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text() {
        assert_eq!(text(), format!("jsm {}", env!("CARGO_PKG_VERSION")));
        assert!(run().is_ok());
    }
}
