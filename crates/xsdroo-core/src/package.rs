use std::fmt;
use url::Url;

const HTTP_PREFIX: &str = "http://";
const WWW_PREFIX: &str = "www.";

/// The package generated classes are placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    segments: Vec<String>,
}

impl Package {
    /// A package given explicitly, such as `com.example.model`.
    pub fn new(name: &str) -> Package {
        Package {
            segments: name
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Derives a package from a target namespace.
    ///
    /// The host's labels are reversed, with any leading `www.` dropped, and
    /// followed by the path segments, so `http://www.example.com/model`
    /// becomes `com.example.model`.
    pub fn from_namespace(namespace: &str) -> Package {
        match Url::parse(namespace) {
            Ok(url) if url.host_str().is_some() => Package::from_url(&url),
            _ => Package::from_text(namespace),
        }
    }

    fn from_url(url: &Url) -> Package {
        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix(WWW_PREFIX).unwrap_or(host);

        let mut segments: Vec<String> = host
            .rsplit('.')
            .filter(|label| !label.is_empty())
            .map(String::from)
            .collect();

        if let Some(path) = url.path_segments() {
            segments.extend(
                path.filter(|segment| !segment.is_empty())
                    .map(String::from),
            );
        }

        Package { segments }
    }

    fn from_text(namespace: &str) -> Package {
        let mut rest = namespace;
        if let Some(index) = rest.find(HTTP_PREFIX) {
            rest = &rest[index + HTTP_PREFIX.len()..];
        }
        if let Some(index) = rest.find(WWW_PREFIX) {
            rest = &rest[index + WWW_PREFIX.len()..];
        }

        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));

        let segments = host
            .rsplit('.')
            .chain(path.split('/'))
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        Package { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The fully qualified name of `class` in this package.
    pub fn qualify(&self, class: &str) -> String {
        if self.segments.is_empty() {
            class.to_string()
        } else {
            format!("{self}.{class}")
        }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
