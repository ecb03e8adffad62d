use crate::collection::{Collection, Folder, Item, RequestItem};
use crate::variable::{VariableCapture, VariableContext, VariableResolver};

pub struct HttpGenerator;

impl HttpGenerator {
    /// Convert a collection to .http file content
    ///
    /// Variables with a non-empty initial value are substituted; dynamic ones
    /// stay as `{{placeholders}}` and are filled by the `@capture` lines.
    pub fn generate(collection: &Collection) -> String {
        let context = Self::static_context(collection);
        let mut blocks = Vec::new();

        for folder in &collection.item {
            Self::collect_blocks(folder, &folder.name, &context, &mut blocks);
        }

        // 每个块自带结尾换行，块之间空一行
        blocks.join("\n")
    }

    fn static_context(collection: &Collection) -> VariableContext {
        let mut context = VariableContext::new();
        for variable in collection.variable.iter().filter(|v| !v.is_dynamic()) {
            context.insert(variable.key.clone(), variable.value.clone());
        }
        context
    }

    fn collect_blocks(
        folder: &Folder,
        label: &str,
        context: &VariableContext,
        blocks: &mut Vec<String>,
    ) {
        for item in &folder.item {
            match item {
                Item::Request(request) => blocks.push(Self::format_request(label, request, context)),
                Item::Folder(nested) => {
                    let nested_label = format!("{} / {}", label, nested.name);
                    Self::collect_blocks(nested, &nested_label, context, blocks);
                }
            }
        }
    }

    fn format_request(label: &str, item: &RequestItem, context: &VariableContext) -> String {
        let request = &item.request;
        let mut block = String::new();

        // 1. Separator / Description
        block.push_str(&format!("### {} / {}\n", label, item.name));
        if let Some(description) = &request.description {
            for line in description.lines() {
                block.push_str(&format!("# {}\n", line));
            }
        }

        // 2. Metadata
        block.push_str(&format!("@name {}\n", item.name));
        if let Some(script) = item.test_script() {
            for capture in VariableCapture::extract_all(script) {
                block.push_str(&capture.to_metadata_line());
                block.push('\n');
            }
        }

        // 3. Request Line
        block.push_str(&format!(
            "{} {}\n",
            request.method,
            VariableResolver::substitute(&request.url.raw, context)
        ));

        // 4. Headers
        if let Some(token) = request.auth.as_ref().and_then(|auth| auth.token()) {
            block.push_str(&format!(
                "Authorization: Bearer {}\n",
                VariableResolver::substitute(token, context)
            ));
        }
        for header in &request.header {
            block.push_str(&format!(
                "{}: {}\n",
                header.key,
                VariableResolver::substitute(&header.value, context)
            ));
        }

        // 5. Body
        if let Some(body) = request.body.as_ref().filter(|b| !b.raw.trim().is_empty()) {
            block.push('\n');
            block.push_str(&VariableResolver::substitute(&body.raw, context));
            block.push('\n');
        }

        block
    }
}
