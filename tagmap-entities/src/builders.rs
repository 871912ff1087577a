pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::raw_item_builder::*;

pub mod raw_item_builder {

    use super::*;
    use crate::{id::*, item::*};

    #[derive(Debug)]
    pub struct RawItemBuild {
        item: RawItem,
    }

    impl RawItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.item.name = name.into();
            self
        }
        pub fn url(mut self, url: &str) -> Self {
            self.item.url = url.into();
            self
        }
        pub fn tags<I, T>(mut self, tags: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<crate::tag::TagName>,
        {
            self.item.tags = tags.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> RawItem {
            self.item
        }
    }

    impl Builder for RawItem {
        type Build = RawItemBuild;
        fn build() -> RawItemBuild {
            RawItemBuild {
                item: RawItem {
                    id: Id::default(),
                    name: String::new(),
                    url: String::new(),
                    tags: vec![],
                },
            }
        }
    }
}
