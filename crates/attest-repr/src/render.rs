//! Canonical rendering.
//!
//! The canonical form is what equality compares and what diffs are computed
//! over, so it must be deterministic: fields keep declaration order, map
//! entries are sorted by their rendered key and then their rendered value,
//! and every nested item sits on its own line at a fixed indentation.
//!
//! ```text
//! Data {
//!   str: "expected",
//!   num: 1234,
//! }
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::options::RenderDirectives;
use crate::ser::to_value_lossy;
use crate::value::{Field, Record, Shape, Value};

/// Render a captured value to its canonical form.
pub fn render(value: &Value, directives: &RenderDirectives) -> String {
    let mut renderer = Renderer {
        directives,
        out: String::new(),
    };
    renderer.value(value, 0);
    renderer.out
}

/// Capture and render any `Serialize` value.
pub fn canonical_form<T: Serialize + ?Sized>(value: &T, directives: &RenderDirectives) -> String {
    render(&to_value_lossy(value), directives)
}

struct Renderer<'a> {
    directives: &'a RenderDirectives,
    out: String,
}

/// One line inside a bracketed block.
struct Entry<'v> {
    label: Option<String>,
    value: &'v Value,
}

impl Renderer<'_> {
    fn value(&mut self, value: &Value, depth: usize) {
        // Writing to a String cannot fail.
        match value {
            Value::Nil => self.out.push_str("None"),
            Value::Unit => self.out.push_str("()"),
            Value::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            Value::Int(i) => {
                let _ = write!(self.out, "{i}");
            }
            Value::Uint(u) => {
                let _ = write!(self.out, "{u}");
            }
            Value::Float32(f) => {
                let _ = write!(self.out, "{f:?}");
            }
            Value::Float64(f) => {
                let _ = write!(self.out, "{f:?}");
            }
            Value::Char(c) => {
                let _ = write!(self.out, "{c:?}");
            }
            Value::Text(s) => {
                let _ = write!(self.out, "{s:?}");
            }
            Value::Bytes(bytes) => {
                let _ = write!(self.out, "b\"{}\"", bytes.escape_ascii());
            }
            Value::Seq(items) => {
                let entries = items.iter().map(|value| Entry { label: None, value }).collect();
                self.block("[", "]", entries, depth);
            }
            Value::Tuple(items) => {
                let entries = items.iter().map(|value| Entry { label: None, value }).collect();
                self.block("(", ")", entries, depth);
            }
            Value::Map(pairs) => self.map(pairs, depth),
            Value::Record(record) => self.record(record, depth),
            Value::Formatted { text, value } => {
                if self.directives.ignore_custom_formatting {
                    self.value(value, depth);
                } else {
                    self.out.push_str(text);
                }
            }
            Value::Unrenderable(reason) => {
                let _ = write!(self.out, "<unrenderable: {reason}>");
            }
        }
    }

    /// Entries are ordered by rendered key, then rendered value. Distinct keys
    /// can render alike once options hide fields, so the key alone is not a
    /// total order.
    fn map(&mut self, pairs: &[(Value, Value)], depth: usize) {
        let mut rendered: Vec<(String, String)> = pairs
            .iter()
            .map(|(key, value)| (self.nested(key, depth + 1), self.nested(value, depth + 1)))
            .collect();
        rendered.sort_unstable();

        self.out.push('{');
        if rendered.is_empty() {
            self.out.push('}');
            return;
        }
        self.out.push('\n');
        for (key, value) in rendered {
            self.indent(depth + 1);
            self.out.push_str(&key);
            self.out.push_str(": ");
            self.out.push_str(&value);
            self.out.push_str(",\n");
        }
        self.indent(depth);
        self.out.push('}');
    }

    fn record(&mut self, record: &Record, depth: usize) {
        let name = record.display_name();
        let fields: Vec<&Field> = record.fields.iter().filter(|f| self.visible(f)).collect();

        match record.shape {
            Shape::Unit => self.out.push_str(&name),
            Shape::Tuple if fields.len() == 1 => {
                self.out.push_str(&name);
                self.out.push('(');
                self.value(&fields[0].value, depth);
                self.out.push(')');
            }
            Shape::Tuple => {
                let entries = fields
                    .iter()
                    .map(|f| Entry {
                        label: None,
                        value: &f.value,
                    })
                    .collect();
                self.block(&format!("{name}("), ")", entries, depth);
            }
            Shape::Named => {
                let entries = fields
                    .iter()
                    .map(|f| Entry {
                        label: f.name.clone(),
                        value: &f.value,
                    })
                    .collect();
                self.block(&format!("{name} {{"), "}", entries, depth);
            }
        }
    }

    fn visible(&self, field: &Field) -> bool {
        if self.directives.hides(field.type_name) {
            return false;
        }
        !(self.directives.omit_empty && field.value.is_empty())
    }

    fn block(&mut self, open: &str, close: &str, entries: Vec<Entry<'_>>, depth: usize) {
        self.out.push_str(open);
        if entries.is_empty() {
            self.out.push_str(close);
            return;
        }
        self.out.push('\n');
        for entry in entries {
            self.indent(depth + 1);
            if let Some(label) = entry.label {
                self.out.push_str(&label);
                self.out.push_str(": ");
            }
            self.value(entry.value, depth + 1);
            self.out.push_str(",\n");
        }
        self.indent(depth);
        self.out.push_str(close);
    }

    /// Render `value` into a fresh buffer at the given depth.
    fn nested(&self, value: &Value, depth: usize) -> String {
        let mut renderer = Renderer {
            directives: self.directives,
            out: String::new(),
        };
        renderer.value(value, depth);
        renderer.out
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(&self.directives.indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;
    use serde::Serialize;

    use super::*;
    use crate::options::CompareOptions;
    use crate::WithFormat;

    #[derive(Serialize)]
    struct Data {
        str: String,
        num: i64,
    }

    #[derive(Serialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Serialize)]
    struct Meters(f64);

    #[derive(Serialize)]
    struct Config {
        name: String,
        retries: Option<u32>,
        tags: Vec<String>,
    }

    #[derive(Serialize)]
    enum Event {
        Started,
        Moved { x: i32, y: i32 },
    }

    struct Celsius(f64);

    impl Serialize for Celsius {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            WithFormat::new(format!("{:.1}C", self.0), &self.0).serialize(s)
        }
    }

    /// Serializes as a map in exactly the order given.
    struct OrderedPairs<K, V>(Vec<(K, V)>);

    impl<K: Serialize, V: Serialize> Serialize for OrderedPairs<K, V> {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_map(self.0.iter().map(|(k, v)| (k, v)))
        }
    }

    fn plain<T: Serialize + ?Sized>(value: &T) -> String {
        canonical_form(value, &RenderDirectives::default())
    }

    #[test]
    fn renders_struct_with_indented_fields() {
        let data = Data {
            str: "expected\ntext".into(),
            num: 1234,
        };
        assert_eq!(
            plain(&data),
            "Data {\n  str: \"expected\\ntext\",\n  num: 1234,\n}"
        );
    }

    #[test]
    fn renders_nested_sequences() {
        let people = vec![
            Person {
                name: "Alec".into(),
                age: 20,
            },
            Person {
                name: "Bob".into(),
                age: 21,
            },
        ];
        let expected = "[\n  Person {\n    name: \"Alec\",\n    age: 20,\n  },\n  Person {\n    name: \"Bob\",\n    age: 21,\n  },\n]";
        assert_eq!(plain(&people), expected);
    }

    #[test]
    fn renders_scalars_and_empty_collections() {
        assert_eq!(plain(&42i32), "42");
        assert_eq!(plain(&1.0f64), "1.0");
        assert_eq!(plain(&'x'), "'x'");
        assert_eq!(plain(&None::<u8>), "None");
        assert_eq!(plain(&()), "()");
        assert_eq!(plain(&Vec::<u8>::new()), "[]");
        assert_eq!(render(&Value::Bytes(vec![b'a', 0]), &RenderDirectives::default()), "b\"a\\x00\"");
    }

    #[test]
    fn newtype_renders_inline() {
        assert_eq!(plain(&Meters(2.5)), "Meters(2.5)");
    }

    #[test]
    fn enum_variants_render_with_type_prefix() {
        assert_eq!(plain(&Event::Started), "Event::Started");
        assert_eq!(
            plain(&Event::Moved { x: 1, y: -1 }),
            "Event::Moved {\n  x: 1,\n  y: -1,\n}"
        );
    }

    #[test]
    fn map_rendering_is_independent_of_insertion_order() {
        let mut a = HashMap::new();
        let mut b = HashMap::new();
        for (k, v) in [("zeta", 1), ("alpha", 2), ("mid", 3)] {
            a.insert(k, v);
        }
        for (k, v) in [("mid", 3), ("zeta", 1), ("alpha", 2)] {
            b.insert(k, v);
        }
        let rendered = plain(&a);
        assert_eq!(rendered, plain(&b));
        assert_eq!(rendered, "{\n  \"alpha\": 2,\n  \"mid\": 3,\n  \"zeta\": 1,\n}");
    }

    #[test]
    fn map_entries_with_colliding_keys_sort_by_value() {
        let directives = CompareOptions::new().exclude::<i64>().directives();
        let pairs = |order: [(i64, &str); 2]| {
            let map: Vec<(Data, &str)> = order
                .into_iter()
                .map(|(num, v)| (Data { str: "k".into(), num }, v))
                .collect();
            to_value_lossy(&OrderedPairs(map))
        };
        let forward = render(&pairs([(1, "b"), (2, "a")]), &directives);
        let reverse = render(&pairs([(2, "a"), (1, "b")]), &directives);
        assert_eq!(forward, reverse);
        assert_eq!(
            forward,
            "{\n  Data {\n    str: \"k\",\n  }: \"a\",\n  Data {\n    str: \"k\",\n  }: \"b\",\n}"
        );
    }

    #[test]
    fn excluded_types_disappear_at_any_depth() {
        let directives = CompareOptions::new().exclude::<i64>().directives();
        let nested = vec![Data {
            str: "a".into(),
            num: 7,
        }];
        assert_eq!(
            canonical_form(&nested, &directives),
            "[\n  Data {\n    str: \"a\",\n  },\n]"
        );
    }

    #[test]
    fn omit_empty_drops_default_fields() {
        let directives = CompareOptions::new().omit_empty().directives();
        let config = Config {
            name: "svc".into(),
            retries: None,
            tags: vec![],
        };
        assert_eq!(
            canonical_form(&config, &directives),
            "Config {\n  name: \"svc\",\n}"
        );
    }

    #[test]
    fn custom_formatting_can_be_bypassed() {
        assert_eq!(plain(&Celsius(21.04)), "21.0C");
        let directives = CompareOptions::new().ignore_custom_formatting().directives();
        assert_eq!(canonical_form(&Celsius(21.04), &directives), "21.04");
    }

    #[test]
    fn rendering_is_stable_across_calls() {
        let data = Data {
            str: "x".into(),
            num: 1,
        };
        assert_eq!(plain(&data), plain(&data));
    }

    proptest! {
        #[test]
        fn text_renders_as_its_debug_form(s in ".*") {
            prop_assert_eq!(plain(&s), format!("{s:?}"));
        }

        #[test]
        fn sequences_render_one_element_per_line(items in proptest::collection::vec(any::<i64>(), 1..16)) {
            let rendered = plain(&items);
            let lines: Vec<&str> = rendered.lines().collect();
            prop_assert_eq!(lines.len(), items.len() + 2);
            for (line, item) in lines[1..lines.len() - 1].iter().zip(&items) {
                prop_assert_eq!(*line, format!("  {item},"));
            }
        }
    }
}
