// Each symbol is one grapheme cluster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberFormat {
    pub point: String,
    pub grouping: Vec<String>,
}

pub const DEFAULT_POINT: &str = ".";
pub const DEFAULT_GROUPING: [&str; 3] = ["'", ",", "_"];

impl NumberFormat {
    pub fn new(point: &str, grouping: &[&str]) -> NumberFormat {
        // The point symbol always wins over a grouping symbol spelled the same.
        let grouping = grouping.iter()
            .filter(|symbol| **symbol != point && !symbol.is_empty())
            .map(|symbol| symbol.to_string())
            .collect();

        NumberFormat {
            point: point.to_string(),
            grouping,
        }
    }

    pub fn is_point(&self, grapheme: &str) -> bool {
        self.point == grapheme
    }

    pub fn is_grouping(&self, grapheme: &str) -> bool {
        self.grouping.iter().any(|symbol| symbol == grapheme)
    }
}

impl Default for NumberFormat {
    fn default() -> NumberFormat {
        NumberFormat::new(DEFAULT_POINT, &DEFAULT_GROUPING)
    }
}
