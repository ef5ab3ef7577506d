//! Page views known to the navigation controller.

use crate::animator::Transition;
use crate::error::Result;

/// What to do when the controller is about to show a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub transition: Transition,
    /// Sole class left on `<body>` after entering the page.
    pub body_class: &'static str,
}

impl PageView {
    pub fn for_namespace(namespace: &str) -> Result<Self> {
        let transition: Transition = namespace.parse()?;
        let body_class = match transition {
            Transition::Home => "page-home",
            Transition::Page2 => "page-2",
            Transition::Page3 => "page-3",
        };
        Ok(Self {
            transition,
            body_class,
        })
    }
}
