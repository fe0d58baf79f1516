use std::sync::OnceLock;

use scraper::Selector;

/// A css selector that is compiled the first time it is used.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        // selectors are literals in this crate, so a bad one is a programming error
        self.cell.get_or_init(|| match Selector::parse(self.source) {
            Ok(sel) => sel,
            Err(e) => panic!("invalid static selector `{}`: {e:?}", self.source),
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
