#[derive(Clone, PartialEq, Debug)]
pub enum MetaTag {
    Title(String),
    Name { name: &'static str, content: String },
    Property { property: &'static str, content: String },
}

/// Document head entries for a page.
#[derive(Clone, PartialEq, Debug)]
pub struct PageMeta {
    pub tags: Vec<MetaTag>,
}

impl PageMeta {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        let mut tags = vec![
            MetaTag::Title(title.to_string()),
            MetaTag::Property {
                property: "og:title",
                content: title.to_string(),
            },
        ];

        if let Some(description) = description.filter(|d| !d.is_empty()) {
            tags.push(MetaTag::Name {
                name: "description",
                content: description.to_string(),
            });
            tags.push(MetaTag::Property {
                property: "og:description",
                content: description.to_string(),
            });
        }

        Self { tags }
    }

    pub fn title(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            MetaTag::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            MetaTag::Name {
                name: "description",
                content,
            } => Some(content.as_str()),
            _ => None,
        })
    }
}

/// Description shown under the heading, only when asked for and non-empty.
pub fn inline_description(show: bool, description: Option<&str>) -> Option<&str> {
    if !show {
        return None;
    }
    description.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod page_meta_tests {
    use super::{inline_description, MetaTag, PageMeta};

    #[test]
    fn title_only() {
        for description in [None, Some("")] {
            let meta = PageMeta::new("Guild X", description);
            assert_eq!(
                meta.tags,
                vec![
                    MetaTag::Title("Guild X".to_string()),
                    MetaTag::Property {
                        property: "og:title",
                        content: "Guild X".to_string()
                    },
                ]
            );
            assert_eq!(meta.description(), None);
        }
    }

    #[test]
    fn with_description() {
        let meta = PageMeta::new("Flavor", Some("The Treasure guild"));
        assert_eq!(meta.title(), Some("Flavor"));
        assert_eq!(meta.description(), Some("The Treasure guild"));
        assert!(meta.tags.contains(&MetaTag::Property {
            property: "og:description",
            content: "The Treasure guild".to_string()
        }));
        assert_eq!(meta.tags.len(), 4);
    }

    #[test]
    fn inline() {
        assert_eq!(inline_description(true, Some("spice")), Some("spice"));
        assert_eq!(inline_description(false, Some("spice")), None);
        assert_eq!(inline_description(true, Some("")), None);
        assert_eq!(inline_description(true, None), None);
    }
}
