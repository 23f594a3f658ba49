use utoipa::openapi::{
    path::Paths, InfoBuilder, LicenseBuilder, OpenApi as OpenApiDoc,
};
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};

pub const API_TITLE: &str = "Persons API";
pub const API_VERSION: &str = "v1";
const DOCUMENTED_BASE: &str = "/person";

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::find_all,
        handlers::find_by_id,
        handlers::create,
        handlers::update,
        handlers::delete,
    ),
    components(schemas(
        dto::PersonDto,
        dto::CreatePersonReq,
        dto::UpdatePersonReq,
        modkit_errors::Problem,
    )),
    tags((name = "persons", description = "Person management"))
)]
pub struct PersonsApiDoc;

/// OpenAPI document for the person routes mounted under `base_path`.
pub fn openapi(base_path: &str) -> OpenApiDoc {
    let mut doc = PersonsApiDoc::openapi();
    doc.info = InfoBuilder::new()
        .title(API_TITLE)
        .version(API_VERSION)
        .description(Some("CRUD operations over the person resource"))
        .license(Some(
            LicenseBuilder::new()
                .name("Apache 2.0")
                .url(Some("https://www.apache.org/licenses/LICENSE-2.0"))
                .build(),
        ))
        .build();

    if base_path != DOCUMENTED_BASE {
        doc.paths = rebase(std::mem::take(&mut doc.paths), base_path);
    }
    doc
}

fn rebase(paths: Paths, base_path: &str) -> Paths {
    let mut out = Paths::new();
    for (path, item) in paths.paths {
        let rebased = match path.strip_prefix(DOCUMENTED_BASE) {
            Some(rest) => format!("{base_path}{rest}"),
            None => path,
        };
        out.paths.insert(rebased, item);
    }
    out
}
