// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

/// Build call arguments from an optional JSON object and `key=value` pairs.
///
/// Pair values that parse as JSON (numbers, booleans, arrays, objects) are
/// taken as such; anything else is a string. Pairs override keys from the
/// JSON object.
pub fn parse_arguments(
    json: Option<&str>,
    pairs: &[String],
) -> anyhow::Result<Arguments> {
    let mut arguments = match json {
        Some(json) => {
            let value: Value =
                serde_json::from_str(json).context("parsing --args")?;
            Arguments::try_from(value).context("parsing --args")?
        }

        None => Arguments::new(),
    };

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("argument {pair:?} is not of the form key=value");
        };

        let value = match serde_json::from_str::<Value>(value) {
            Ok(value @ (Value::Number(_)
            | Value::Bool(_)
            | Value::Array(_)
            | Value::Object(_))) => value,
            _ => Value::from(value),
        };

        arguments.insert(key, value);
    }

    Ok(arguments)
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_parse_arguments() {
        let pairs = vec![
            "picklist_name=color__c".to_string(),
            "values=[\"Red\",\"Green\"]".to_string(),
            "include_data=true".to_string(),
            "count=10".to_string(),
            "filter=userName eq \"jdoe\"".to_string(),
            "description=".to_string(),
        ];

        let arguments =
            parse_arguments(Some(r#"{"count": 5, "name": "Snap"}"#), &pairs)
                .unwrap();

        assert_eq!(
            arguments,
            Arguments::try_from(json!({
                "picklist_name": "color__c",
                "values": ["Red", "Green"],
                "include_data": true,
                "count": 10,
                "filter": "userName eq \"jdoe\"",
                "description": "",
                "name": "Snap",
            }))
            .unwrap(),
        );
    }

    #[test]
    fn test_parse_arguments_rejects_malformed_input() {
        assert!(parse_arguments(Some("[1, 2]"), &[]).is_err());
        assert!(parse_arguments(Some("{"), &[]).is_err());
        assert!(parse_arguments(None, &["no-equals-sign".to_string()]).is_err());
    }

    #[test]
    fn test_quoted_json_strings_stay_verbatim() {
        let arguments =
            parse_arguments(None, &["name=\"quoted\"".to_string()]).unwrap();

        assert_eq!(arguments.get("name"), Some(&json!("\"quoted\"")));
    }
}
