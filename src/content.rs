//! Homepage copy rendered by the terminal hero and `show`.

pub const DEFAULT_INSTALL_COMMAND: &str = "npx @gqty/cli";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub content: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Read",
        content: "Fetch data by writing simple type-based orientated code, and GQty creates the GraphQL query on the fly.",
    },
    Feature {
        title: "Write",
        content: "Create, Update, Delete? Call the function - that’s it...",
    },
    Feature {
        title: "Performance optimized",
        content: "Normalized cache built-In, which you can also use quite easily for state management!",
    },
];

#[derive(Debug, Clone)]
pub struct HomepageContent {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub install_command: String,
    pub get_started_href: &'static str,
    pub features: &'static [Feature],
}

impl HomepageContent {
    pub fn new(install_command: impl Into<String>) -> Self {
        Self {
            headline: "The No-GraphQL client",
            tagline: "for TypeScript",
            install_command: install_command.into(),
            get_started_href: "/getting-started",
            features: &FEATURES,
        }
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = format!(
            "{}\n{}\n\n  $ {}\n\nGet Started: {}\n",
            self.headline, self.tagline, self.install_command, self.get_started_href
        );
        for feature in self.features {
            out.push_str(&format!("\n{}\n  {}\n", feature.title, feature.content));
        }
        out
    }
}

impl Default for HomepageContent {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_COMMAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_lists_command_and_features() {
        let text = HomepageContent::default().to_plain_text();
        assert!(text.starts_with("The No-GraphQL client\nfor TypeScript\n"));
        assert!(text.contains("$ npx @gqty/cli"));
        for feature in FEATURES {
            assert!(text.contains(feature.title));
            assert!(text.contains(feature.content));
        }
    }

    #[test]
    fn test_custom_command() {
        let content = HomepageContent::new("pnpm dlx @gqty/cli");
        assert!(content.to_plain_text().contains("$ pnpm dlx @gqty/cli"));
    }
}
