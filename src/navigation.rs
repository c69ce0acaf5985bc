//! Navigation targets for selected search results.

use std::fmt;

/// Where selecting an entry takes the reader: a route plus an optional in-page anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget {
    pub route: String,
    pub anchor: Option<String>,
}

impl NavTarget {
    /// Split a catalog path at its first `#`.
    ///
    /// An empty route becomes `/` and an empty fragment means no anchor.
    pub fn parse(path: &str) -> Self {
        let (route, anchor) = match path.split_once('#') {
            Some((route, fragment)) => (route, Some(fragment)),
            None => (path, None),
        };

        let route = if route.is_empty() { "/" } else { route };
        Self {
            route: route.to_string(),
            anchor: anchor.filter(|a| !a.is_empty()).map(str::to_string),
        }
    }

    /// Whether the consumer should scroll to an anchor after navigating.
    pub const fn scrolls(&self) -> bool {
        self.anchor.is_some()
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.route, anchor),
            None => f.write_str(&self.route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("/components#gantt-chart", "/components", Some("gantt-chart"))]
    #[case("/#installation", "/", Some("installation"))]
    #[case("#installation", "/", Some("installation"))]
    #[case("/components", "/components", None)]
    #[case("/components#", "/components", None)]
    #[case("", "/", None)]
    #[case("/a#b#c", "/a", Some("b#c"))]
    fn parses_route_and_anchor(
        #[case] path: &str,
        #[case] route: &str,
        #[case] anchor: Option<&str>,
    ) {
        let target = NavTarget::parse(path);
        check!(target.route == route);
        check!(target.anchor.as_deref() == anchor);
        check!(target.scrolls() == anchor.is_some());
    }

    #[rstest]
    #[case("/components#props", "/components#props")]
    #[case("#installation", "/#installation")]
    #[case("/components#", "/components")]
    fn display_reassembles_path(#[case] path: &str, #[case] expected: &str) {
        check!(NavTarget::parse(path).to_string() == expected);
    }
}
