//! Per-view page-size configuration.

/// Page-size settings of one table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub default_page_size: usize,
    /// Sizes offered by the page-size selector, ascending.
    pub page_sizes: &'static [usize],
}

impl ViewConfig {
    pub const DEVICES: ViewConfig = ViewConfig {
        default_page_size: 5,
        page_sizes: &[5, 10, 15, 20, 50, 100],
    };

    pub const NODES: ViewConfig = ViewConfig {
        default_page_size: 5,
        page_sizes: &[5, 10, 20, 50, 100],
    };

    pub const ACTIVITIES: ViewConfig = ViewConfig {
        default_page_size: 10,
        page_sizes: &[5, 10, 20, 50, 100],
    };

    pub fn allows(&self, page_size: usize) -> bool {
        self.page_sizes.contains(&page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_allowed_sizes() {
        for config in [ViewConfig::DEVICES, ViewConfig::NODES, ViewConfig::ACTIVITIES] {
            assert!(config.allows(config.default_page_size));
            assert!(config.page_sizes.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(ViewConfig::DEVICES.allows(15));
        assert!(!ViewConfig::NODES.allows(15));
    }
}
