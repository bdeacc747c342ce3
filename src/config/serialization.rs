//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::fields::FieldSpec;
use super::Config;
use crate::form::default_fields;

impl Config {
    /// Serialize the config to a commented TOML document
    pub fn to_toml(&self) -> String {
        let mut output = String::from("# formdeck configuration\n\n");

        output.push_str("# Heading shown above the form\n");
        output.push_str(&format!("title = {}\n\n", toml_string(&self.title)));

        output.push_str("# Theme: \"Deck Dark\", \"Deck Light\", \"Terminal\",\n");
        output.push_str("# or the name of a file in ~/.config/formdeck/themes/\n");
        output.push_str(&format!("theme = {}\n\n", toml_string(&self.theme)));

        output.push_str("[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG overrides)\n");
        output.push_str(&format!("level = {}\n", toml_string(&self.logging.level)));
        output.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {}\n",
            toml_string(&self.logging.file_dir.display().to_string())
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {}\n",
            toml_string(self.logging.file_rotation.as_str())
        ));
        output.push_str(&format!(
            "file_prefix = {}\n",
            toml_string(&self.logging.file_prefix)
        ));

        output.push_str(&self.fields_to_toml());
        output
    }

    /// Serialize [[fields]] entries, or commented defaults when none are set
    fn fields_to_toml(&self) -> String {
        let mut output = String::from("\n# Initial form fields. Kinds: Text, Number, Select, Checkbox\n");

        if self.fields.is_empty() {
            output.push_str("# Without any [[fields]] the form starts with:\n");
            for def in default_fields() {
                let entry = field_to_toml(&FieldSpec::from_definition(&def));
                for line in entry.lines() {
                    if line.is_empty() {
                        output.push_str("#\n");
                    } else {
                        output.push_str(&format!("# {}\n", line));
                    }
                }
            }
            return output;
        }

        for spec in &self.fields {
            output.push_str(&field_to_toml(spec));
        }
        output
    }
}

fn field_to_toml(spec: &FieldSpec) -> String {
    let mut output = String::from("\n[[fields]]\n");
    output.push_str(&format!("name = {}\n", toml_string(&spec.name)));
    output.push_str(&format!("kind = {}\n", toml_string(&spec.kind)));
    if let Some(label) = &spec.label {
        output.push_str(&format!("label = {}\n", toml_string(label)));
    }
    if spec.required {
        output.push_str("required = true\n");
    }
    if let Some(options) = &spec.options {
        let items: Vec<String> = options.iter().map(|o| toml_string(o)).collect();
        output.push_str(&format!("options = [{}]\n", items.join(", ")));
    }
    if let Some(text) = &spec.checkbox_text {
        output.push_str(&format!("checkbox_text = {}\n", toml_string(text)));
    }
    output
}

/// Quote a string as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
