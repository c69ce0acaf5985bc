//! MCP server exposing the documentation tools over stdio.

use crate::state::SiteState;
use crate::tools::get_example::{GetExampleRequest, handle_get_example};
use crate::tools::open_section::{OpenSectionRequest, handle_open_section};
use crate::tools::search::{SearchRequest, handle_search};
use crate::tools::set_theme::{SetThemeRequest, handle_set_theme};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for the Gantt component documentation
#[derive(Clone)]
pub struct DocsServer {
    /// Shared catalog, samples and theme store
    state: Arc<SiteState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocsServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DocsServer {
    pub fn new(state: Arc<SiteState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Search the Gantt component documentation. Ranks sections by title, description, keyword and category matches and groups the results by category. An empty query lists every section.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    fn search_docs(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, &request)
    }

    #[tool(
        description = "Open a documentation section by id. Returns its route, the anchor to scroll to, and the code samples shown in that section.",
        input_schema = inline_schema_for_type::<OpenSectionRequest>()
    )]
    fn open_section(
        &self,
        Parameters(request): Parameters<OpenSectionRequest>,
    ) -> std::result::Result<String, String> {
        handle_open_section(&self.state, &request)
    }

    #[tool(
        description = "Show a code sample from the documentation as a fenced code block, optionally with line numbers.",
        input_schema = inline_schema_for_type::<GetExampleRequest>()
    )]
    fn get_example(
        &self,
        Parameters(request): Parameters<GetExampleRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_example(&self.state, &request)
    }

    #[tool(
        description = "Read or change the light/dark theme preference. The choice is persisted and used when rendering code samples.",
        input_schema = inline_schema_for_type::<SetThemeRequest>()
    )]
    fn set_theme(
        &self,
        Parameters(request): Parameters<SetThemeRequest>,
    ) -> std::result::Result<String, String> {
        handle_set_theme(&self.state, &request)
    }
}

#[tool_handler]
impl ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "gantt-docs: documentation for the React Modern Gantt component. \
                 Use search_docs to find sections, open_section to get a section's route and samples, \
                 get_example to print a code sample, and set_theme to switch between light and dark output."
                    .to_string(),
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
