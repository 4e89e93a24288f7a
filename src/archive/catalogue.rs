/// Archive catalogue listing

use crate::format::ImageStatus;
use std::fmt;

/// Index, name and status of one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    /// Slot index
    pub index: usize,
    /// Image name
    pub name: String,
    /// Image status
    pub status: ImageStatus,
}

impl fmt::Display for CatalogueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5}\t{:<15}\t{}", self.index, self.name, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_columns() {
        let entry = CatalogueEntry {
            index: 7,
            name: "ELITE".to_string(),
            status: ImageStatus::Locked,
        };
        assert_eq!(entry.to_string(), "7    \tELITE          \tLocked");
    }

    #[test]
    fn test_display_empty_name() {
        let entry = CatalogueEntry {
            index: 510,
            name: String::new(),
            status: ImageStatus::NotInitialised,
        };
        assert_eq!(
            entry.to_string(),
            format!("510  \t{}\tNotInitialised", " ".repeat(15))
        );
    }
}
