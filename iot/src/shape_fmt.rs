/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Human readable rendering shared by every shape's `Display` implementation.
//!
//! A shape renders as `Name {wireName: value, otherName: value}`. Absent members are left out,
//! lists render as `[a, b]`, maps as `{k=v, k2=v2}` in key order, timestamps as RFC-3339 and
//! enums as their wire literal.

use smithy_types::instant::Format;
use smithy_types::Instant;
use std::collections::HashMap;
use std::fmt;

const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Renders a member value inside a shape's `Display` output.
pub(crate) trait RenderValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RenderValue for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderValue for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl RenderValue for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl RenderValue for Instant {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(date_time) => f.write_str(&date_time),
            // outside years 0000 to 9999, fall back to epoch seconds
            Err(_) => write!(f, "{}", self.secs()),
        }
    }
}

impl<T: RenderValue> RenderValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: RenderValue> RenderValue for HashMap<String, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.write_str("{")?;
        for (idx, (key, value)) in entries.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes `Name {member: value, ...}`, skipping members that aren't set.
pub(crate) struct ShapeFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        let result = write!(f, "{} {{", name);
        ShapeFormatter {
            f,
            result,
            has_fields: false,
        }
    }

    pub(crate) fn field<T: RenderValue>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if self.result.is_ok() {
            if let Some(value) = value {
                self.result = self.begin_field(name);
                if self.result.is_ok() {
                    self.result = value.render(self.f);
                }
            }
        }
        self
    }

    /// Like [`field`](Self::field), but never writes the value itself.
    pub(crate) fn sensitive_field<T>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if self.result.is_ok() && value.is_some() {
            self.result = self.begin_field(name);
            if self.result.is_ok() {
                self.result = self.f.write_str(REDACTED);
            }
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.f.write_str("}")
    }

    fn begin_field(&mut self, name: &str) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.has_fields = true;
        write!(self.f, "{}: ", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        secret: Option<String>,
        tags: Option<Vec<String>>,
        labels: Option<HashMap<String, String>>,
        seen: Option<Instant>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = ShapeFormatter::new(f, "Sample");
            formatter.field("name", &self.name);
            formatter.field("count", &self.count);
            formatter.sensitive_field("secret", &self.secret);
            formatter.field("tags", &self.tags);
            formatter.field("labels", &self.labels);
            formatter.field("seen", &self.seen);
            formatter.finish()
        }
    }

    fn empty() -> Sample {
        Sample {
            name: None,
            count: None,
            secret: None,
            tags: None,
            labels: None,
            seen: None,
        }
    }

    #[test]
    fn absent_members_are_skipped() {
        assert_eq!(empty().to_string(), "Sample {}");
        let sample = Sample {
            count: Some(3),
            ..empty()
        };
        assert_eq!(sample.to_string(), "Sample {count: 3}");
    }

    #[test]
    fn renders_collections_and_timestamps() {
        let labels = HashMap::from([
            ("zone".to_string(), "b".to_string()),
            ("app".to_string(), "iot".to_string()),
        ]);
        let sample = Sample {
            name: Some("thing".into()),
            tags: Some(vec!["a".into(), "b".into()]),
            labels: Some(labels),
            seen: Some(Instant::from_secs(1576540098)),
            ..empty()
        };
        assert_eq!(
            sample.to_string(),
            "Sample {name: thing, tags: [a, b], labels: {app=iot, zone=b}, seen: 2019-12-16T23:48:18Z}"
        );
    }

    #[test]
    fn timestamps_past_year_9999_render_as_epoch_seconds() {
        let sample = Sample {
            seen: Some(Instant::from_secs(253402300800)),
            ..empty()
        };
        assert_eq!(sample.to_string(), "Sample {seen: 253402300800}");
        let sample = Sample {
            seen: Some(Instant::from_secs(253402300799)),
            ..empty()
        };
        assert_eq!(sample.to_string(), "Sample {seen: 9999-12-31T23:59:59Z}");
    }

    #[test]
    fn empty_collections_are_present() {
        let sample = Sample {
            tags: Some(vec![]),
            labels: Some(HashMap::new()),
            ..empty()
        };
        assert_eq!(sample.to_string(), "Sample {tags: [], labels: {}}");
    }

    #[test]
    fn sensitive_values_are_redacted() {
        let sample = Sample {
            secret: Some("hunter2".into()),
            ..empty()
        };
        let rendered = sample.to_string();
        assert_eq!(rendered, "Sample {secret: *** Sensitive Data Redacted ***}");
        assert!(!rendered.contains("hunter2"));
    }
}
