// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;

use serde_json::Map;
use serde_json::json;

/// A function-calling tool definition, in the shape LLM tool-use APIs
/// expect.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: String,

    pub function: FunctionDefinition,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,

    /// JSON schema of the arguments object
    pub parameters: Value,
}

/// The JSON schema of `T` with every subschema inlined, so it can be
/// embedded in a tool definition without a `definitions` section.
pub fn inline_schema<T: JsonSchema>() -> Value {
    let schema = schemars::r#gen::SchemaSettings::draft07()
        .with(|settings| {
            settings.inline_subschemas = true;
            settings.meta_schema = None;
        })
        .into_generator()
        .into_root_schema_for::<T>();

    serde_json::to_value(schema.schema).unwrap_or_default()
}

impl ToolDefinition {
    pub fn for_endpoint(endpoint: &Endpoint) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in endpoint.params {
            properties.insert(param.name.to_string(), param_schema(param));

            if param.required {
                required.push(Value::from(param.name));
            }
        }

        let mut parameters = json!({
            "type": "object",
            "properties": properties,
        });

        if !required.is_empty() {
            parameters["required"] = Value::Array(required);
        }

        ToolDefinition {
            kind: "function".to_string(),
            function: FunctionDefinition {
                name: endpoint.tool_name.to_string(),
                description: endpoint.description.to_string(),
                parameters,
            },
        }
    }
}

fn param_schema(param: &Param) -> Value {
    let mut schema = match param.schema {
        Some(schema) => schema(),
        None => json!({ "type": param.kind.json_type() }),
    };

    schema["description"] = Value::from(param.description);

    if param.kind == ParamKind::StringList {
        schema["items"] = json!({ "type": "string" });
    }

    if !param.allowed.is_empty() {
        schema["enum"] = json!(param.allowed);
    }

    if let Some(default) = param.default {
        schema["default"] = match param.kind {
            ParamKind::Boolean | ParamKind::Integer => {
                serde_json::from_str::<Value>(default)
                    .unwrap_or_else(|_| json!(default))
            }
            _ => json!(default),
        };
    }

    schema
}

/// Tool definitions for the whole catalog, in catalog order.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ENDPOINTS.iter().map(ToolDefinition::for_endpoint).collect()
}
