use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub env: String,
    pub table_name: String,
    pub scan_page_size: usize,
}

impl Configuration {
    pub fn new(env: &str) -> Self {
        Configuration {
            env: env.to_string(),
            table_name: "books".to_string(),
            scan_page_size: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.env.as_str());
        assert_eq!("books", config.table_name.as_str());
        assert_eq!(100, config.scan_page_size);
    }
}
