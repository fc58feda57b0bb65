// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

use serde_json::Map;

/// The named arguments of one call, in the shape a function-calling model
/// produces them: a JSON object keyed by parameter name.
///
/// `null` and the empty string are treated as if the key were absent.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// The value under `key`, unless it is absent, `null` or `""`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.0.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(value),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// A string-like argument. Numbers are accepted and rendered in decimal.
    pub fn string(&self, key: &str) -> Result<Option<String>, Error> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(Error::invalid(
                key,
                format!("expected a string, got {other}"),
            )),
        }
    }

    /// The argument for a scalar `param` rendered the way it goes on the
    /// wire, with the param's default applied. Fails if a required param is
    /// absent or the value does not fit the param.
    pub fn render(&self, param: &Param) -> Result<Option<String>, Error> {
        let rendered = match param.kind {
            ParamKind::String | ParamKind::File => self.string(param.name)?,
            ParamKind::Integer => self.integer(param.name)?,
            ParamKind::Boolean => self.boolean(param.name)?,
            ParamKind::StringList | ParamKind::Object => {
                return Err(Error::invalid(
                    param.name,
                    "not a scalar parameter",
                ));
            }
        };

        let rendered = rendered.or_else(|| param.default.map(str::to_string));

        match rendered {
            None if param.required => {
                Err(Error::MissingArgument(param.name.to_string()))
            }

            Some(value)
                if !param.allowed.is_empty()
                    && !param.allowed.contains(&value.as_str()) =>
            {
                Err(Error::invalid(
                    param.name,
                    format!(
                        "{value} is not one of {}",
                        param.allowed.join(", ")
                    ),
                ))
            }

            rendered => Ok(rendered),
        }
    }

    /// A list of strings. A single string is taken as a list of one.
    pub fn string_list(&self, param: &Param) -> Result<Vec<String>, Error> {
        let values = match self.get(param.name) {
            None if param.required => {
                return Err(Error::MissingArgument(param.name.to_string()));
            }

            None => vec![],

            Some(Value::String(s)) => vec![s.clone()],

            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(Error::invalid(
                        param.name,
                        format!("expected a list of strings, found {other}"),
                    )),
                })
                .collect::<Result<Vec<_>, Error>>()?,

            Some(other) => {
                return Err(Error::invalid(
                    param.name,
                    format!("expected a list of strings, got {other}"),
                ));
            }
        };

        if values.is_empty() && param.required {
            return Err(Error::MissingArgument(param.name.to_string()));
        }

        Ok(values)
    }

    /// A JSON object argument.
    pub fn object(
        &self,
        param: &Param,
    ) -> Result<Option<&Map<String, Value>>, Error> {
        match self.get(param.name) {
            None if param.required => {
                Err(Error::MissingArgument(param.name.to_string()))
            }

            None => Ok(None),

            Some(Value::Object(map)) => Ok(Some(map)),

            Some(other) => Err(Error::invalid(
                param.name,
                format!("expected an object, got {other}"),
            )),
        }
    }

    fn integer(&self, key: &str) -> Result<Option<String>, Error> {
        match self.get(key) {
            None => Ok(None),

            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                Ok(Some(n.to_string()))
            }

            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(Some(n.to_string())),
                Err(_) => Err(Error::invalid(
                    key,
                    format!("expected an integer, got {s:?}"),
                )),
            },

            Some(other) => Err(Error::invalid(
                key,
                format!("expected an integer, got {other}"),
            )),
        }
    }

    fn boolean(&self, key: &str) -> Result<Option<String>, Error> {
        match self.get(key) {
            None => Ok(None),

            Some(Value::Bool(b)) => Ok(Some(b.to_string())),

            Some(Value::String(s)) if s == "true" || s == "false" => {
                Ok(Some(s.clone()))
            }

            Some(other) => Err(Error::invalid(
                key,
                format!("expected a boolean, got {other}"),
            )),
        }
    }
}

impl From<Map<String, Value>> for Arguments {
    fn from(map: Map<String, Value>) -> Self {
        Arguments(map)
    }
}

impl TryFrom<Value> for Arguments {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Arguments(map)),
            Value::Null => Ok(Arguments::new()),
            other => Err(Error::invalid(
                "arguments",
                format!("expected an object, got {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_absent_values() {
        let args = Arguments::try_from(json!({
            "a": null,
            "b": "",
            "c": "value",
        }))
        .unwrap();

        assert!(args.get("a").is_none());
        assert!(args.get("b").is_none());
        assert!(args.get("missing").is_none());
        assert_eq!(args.get("c"), Some(&json!("value")));
    }

    #[test]
    fn test_arguments_must_be_an_object() {
        assert!(Arguments::try_from(json!(["a", "b"])).is_err());
        assert_eq!(Arguments::try_from(Value::Null).unwrap(), Arguments::new());
    }

    #[test]
    fn test_render_scalars() {
        let count = Param::query("count", "").of_kind(ParamKind::Integer);
        let loc = Param::query("loc", "").of_kind(ParamKind::Boolean);
        let id = Param::path("id", "");

        let args = Arguments::new()
            .with("count", 25)
            .with("loc", false)
            .with("id", 42);

        assert_eq!(args.render(&count).unwrap().as_deref(), Some("25"));
        assert_eq!(args.render(&loc).unwrap().as_deref(), Some("false"));
        assert_eq!(args.render(&id).unwrap().as_deref(), Some("42"));

        // String spellings are accepted too
        let args = Arguments::new().with("count", "10").with("loc", "true");
        assert_eq!(args.render(&count).unwrap().as_deref(), Some("10"));
        assert_eq!(args.render(&loc).unwrap().as_deref(), Some("true"));

        let args = Arguments::new().with("count", "ten").with("loc", "yes");
        assert!(matches!(
            args.render(&count),
            Err(Error::InvalidArgument { name, .. }) if name == "count"
        ));
        assert!(args.render(&loc).is_err());
    }

    #[test]
    fn test_render_defaults_and_required() {
        const LEVELS: &[&str] = &["all__sys", "error__sys"];

        let level = Param::body("log_level", "")
            .default_value("all__sys")
            .one_of(LEVELS);

        assert_eq!(
            Arguments::new().render(&level).unwrap().as_deref(),
            Some("all__sys"),
        );

        let args = Arguments::new().with("log_level", "verbose__sys");
        assert!(args.render(&level).is_err());

        let name = Param::body("name", "");
        assert!(matches!(
            Arguments::new().with("name", "").render(&name),
            Err(Error::MissingArgument(n)) if n == "name"
        ));

        let optional = Param::query("filter", "");
        assert_eq!(Arguments::new().render(&optional).unwrap(), None);
    }

    #[test]
    fn test_string_list() {
        let values = Param::body("values", "").of_kind(ParamKind::StringList);

        let args = Arguments::new().with("values", json!(["red", "green"]));
        assert_eq!(args.string_list(&values).unwrap(), vec!["red", "green"]);

        let args = Arguments::new().with("values", "blue");
        assert_eq!(args.string_list(&values).unwrap(), vec!["blue"]);

        let args = Arguments::new().with("values", json!([]));
        assert!(args.string_list(&values).is_err());

        let args = Arguments::new().with("values", json!([{"a": 1}]));
        assert!(args.string_list(&values).is_err());
    }

    #[test]
    fn test_object() {
        let data = Param::body("data", "").of_kind(ParamKind::Object);

        let args = Arguments::new().with("data", json!({"red__c": "Red"}));
        assert_eq!(args.object(&data).unwrap().unwrap().len(), 1);

        let args = Arguments::new().with("data", "red__c=Red");
        assert!(args.object(&data).is_err());

        assert!(Arguments::new().object(&data).is_err());
    }
}
