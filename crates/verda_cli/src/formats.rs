//! Output formats for the token pipeline
//!
//! Each platform gets a text rendering of the flattened token table:
//! CSS custom properties, SCSS variables, ES module constants, and a typed
//! TypeScript declaration. String values are JSON-escaped in the script
//! formats, since font stacks carry embedded quotes.

use clap::ValueEnum;
use verda_theme::TokenTable;

const HEADER: &str = "Generated by the Verda token pipeline. Do not edit directly.";

/// Token output platforms
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    Css,
    Scss,
    Js,
    Ts,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Platform::Css, Platform::Scss, Platform::Js, Platform::Ts];

    /// Render the table for this platform
    pub fn render(self, table: &TokenTable) -> String {
        match self {
            Platform::Css => css_variables(table),
            Platform::Scss => scss_variables(table),
            Platform::Js => js_constants(table),
            Platform::Ts => ts_declarations(table),
        }
    }
}

/// `:root { --token-name: value; }`
fn css_variables(table: &TokenTable) -> String {
    let mut out = format!("/* {HEADER} */\n:root {{\n");
    for (name, value) in table.iter() {
        out.push_str(&format!("  --{name}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

/// `$token-name: value;`
fn scss_variables(table: &TokenTable) -> String {
    let mut out = format!("// {HEADER}\n");
    for (name, value) in table.iter() {
        out.push_str(&format!("${name}: {value};\n"));
    }
    out
}

/// `export const tokenName = "value";`
fn js_constants(table: &TokenTable) -> String {
    let mut out = format!("// {HEADER}\n");
    for (name, value) in table.iter() {
        out.push_str(&format!(
            "export const {} = {};\n",
            camel_case(name),
            quote(value)
        ));
    }
    out
}

/// `export const tokens = { "token-name": "value", ... } as const;`
fn ts_declarations(table: &TokenTable) -> String {
    let mut out = format!("// {HEADER}\nexport const tokens = {{\n");
    let entries: Vec<String> = table
        .iter()
        .map(|(name, value)| format!("  {}: {}", quote(name), quote(value)))
        .collect();
    out.push_str(&entries.join(",\n"));
    out.push_str("\n} as const;\n\nexport type TokenName = keyof typeof tokens;\n");
    out
}

/// JSON-escape a value into a double-quoted string literal
fn quote(value: &str) -> String {
    serde_json::to_string(value).expect("string serialization is infallible")
}

/// `color-base-primary-50` -> `colorBasePrimary50`
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, segment) in name.split('-').enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
