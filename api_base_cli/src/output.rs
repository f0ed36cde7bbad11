use api_base::{ApiBase, ApiBaseError};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Joined {
    pub(crate) path: String,
    pub(crate) url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub(crate) base_url: ApiBase,
    pub(crate) urls: Vec<Joined>,
}

impl Report {
    pub(crate) fn build(base: ApiBase, paths: &[String]) -> Self {
        let urls = paths
            .iter()
            .map(|path| Joined {
                url: base.join(path),
                path: path.clone(),
            })
            .collect();
        Self {
            base_url: base,
            urls,
        }
    }

    /// Every URL this report prints, in order.
    pub(crate) fn printed(&self) -> Vec<&str> {
        if self.urls.is_empty() {
            vec![self.base_url.as_str()]
        } else {
            self.urls.iter().map(|j| j.url.as_str()).collect()
        }
    }

    /// Parse every printed URL, returning the failures.
    pub(crate) fn check(&self) -> Vec<ApiBaseError> {
        if self.urls.is_empty() {
            return self.base_url.to_url().err().into_iter().collect();
        }
        self.urls
            .iter()
            .filter_map(|j| self.base_url.join_to_url(&j.path).err())
            .collect()
    }

    pub(crate) fn render_lines(&self) -> String {
        self.printed().join("\n")
    }

    pub(crate) fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_fall_back_to_base() {
        let report = Report::build(ApiBase::default(), &[]);
        assert_eq!(report.render_lines(), "http://localhost:3000");
    }

    #[test]
    fn lines_join_each_path() {
        let paths = vec!["users".to_string(), "https://x.test/a".to_string()];
        let report = Report::build(ApiBase::new("http://b.test/"), &paths);
        assert_eq!(report.render_lines(), "http://b.test/users\nhttps://x.test/a");
    }

    #[test]
    fn check_reports_unparseable_urls() {
        let paths = vec!["users".to_string(), "https://ok.test".to_string()];
        let report = Report::build(ApiBase::new("not a url"), &paths);
        assert_eq!(report.check().len(), 1);

        assert_eq!(Report::build(ApiBase::new("nope"), &[]).check().len(), 1);
        assert!(Report::build(ApiBase::default(), &paths).check().is_empty());
    }

    #[test]
    fn json_shape() {
        let paths = vec!["/v1".to_string()];
        let report = Report::build(ApiBase::default(), &paths);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(value["base_url"], "http://localhost:3000");
        assert_eq!(value["urls"][0]["path"], "/v1");
        assert_eq!(value["urls"][0]["url"], "http://localhost:3000/v1");
    }
}
