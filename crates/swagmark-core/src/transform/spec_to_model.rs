use log::warn;

use crate::ir::*;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::{Parameter, ParameterOrRef};
use crate::parse::response::{Response, ResponseOrRef};
use crate::parse::simple_ref;
use crate::parse::spec::SwaggerSpec;

use super::schema_resolver::{
    definition_to_model, parameter_type, schema_or_ref_to_type, value_to_text,
};

/// Transform a parsed Swagger spec into the render-ready document model.
///
/// Never fails: `null` path items are skipped, and `$ref` parameters or
/// responses that point nowhere are dropped with a warning.
pub fn transform(spec: &SwaggerSpec) -> ApiDoc {
    let info = ApiInfo {
        title: spec.info.title.clone(),
        description: spec.info.description.clone(),
        version: spec.info.version.clone(),
        terms_of_service: spec.info.terms_of_service.clone(),
        contact: spec.info.contact.as_ref().map(|c| ApiContact {
            name: c.name.clone(),
            email: c.email.clone(),
        }),
        license: spec.info.license.as_ref().map(|l| ApiLicense {
            name: l.name.clone(),
            url: l.url.clone(),
        }),
    };

    let tags = spec
        .tags
        .iter()
        .map(|t| ApiTag {
            name: t.name.clone(),
            description: t.description.clone(),
        })
        .collect();

    let paths = spec
        .paths
        .iter()
        .filter_map(|(path, item)| {
            let item = item.as_ref()?;
            Some(ApiPath {
                path: path.clone(),
                operations: collect_operations(spec, path, item),
            })
        })
        .collect();

    let definitions = spec
        .definitions
        .iter()
        .map(|(name, schema)| definition_to_model(name, schema))
        .collect();

    ApiDoc {
        info,
        host: spec.host.clone(),
        base_path: spec.base_path.clone(),
        schemes: spec.schemes.clone(),
        consumes: spec.consumes.clone(),
        produces: spec.produces.clone(),
        tags,
        paths,
        definitions,
    }
}

fn collect_operations(spec: &SwaggerSpec, path: &str, item: &PathItem) -> Vec<ApiOperation> {
    let path_params = resolve_parameters(spec, &item.parameters);
    let mut out = Vec::new();

    macro_rules! add_op {
        ($method:expr, $op:expr) => {
            if let Some(ref op) = $op {
                out.push(build_operation(spec, $method, path, op, &path_params));
            }
        };
    }

    add_op!(HttpMethod::Get, item.get);
    add_op!(HttpMethod::Put, item.put);
    add_op!(HttpMethod::Head, item.head);
    add_op!(HttpMethod::Post, item.post);
    add_op!(HttpMethod::Delete, item.delete);
    add_op!(HttpMethod::Patch, item.patch);
    add_op!(HttpMethod::Options, item.options);

    out
}

fn build_operation(
    spec: &SwaggerSpec,
    method: HttpMethod,
    path: &str,
    op: &Operation,
    path_params: &[ApiParameter],
) -> ApiOperation {
    let own_params = resolve_parameters(spec, &op.parameters);

    // Operation-level parameters override path-level ones with the same name and location.
    let mut parameters: Vec<ApiParameter> = path_params
        .iter()
        .filter(|pp| {
            !own_params
                .iter()
                .any(|p| p.name == pp.name && p.location == pp.location)
        })
        .cloned()
        .collect();
    parameters.extend(own_params);

    let responses = op
        .responses
        .iter()
        .filter_map(|(code, response)| {
            let response = resolve_response(spec, response)?;
            Some(ApiResponse {
                code: code.clone(),
                description: response.description.clone(),
                schema: response.schema.as_ref().map(schema_or_ref_to_type),
            })
        })
        .collect();

    ApiOperation {
        method,
        path: path.to_string(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        parameters,
        responses,
        consumes: op.consumes.clone(),
        produces: op.produces.clone(),
        tags: op.tags.clone(),
    }
}

fn resolve_parameters(spec: &SwaggerSpec, params: &[ParameterOrRef]) -> Vec<ApiParameter> {
    params
        .iter()
        .filter_map(|p| {
            let param: &Parameter = match p {
                ParameterOrRef::Parameter(param) => param.as_ref(),
                ParameterOrRef::Ref { ref_path } => {
                    let found = spec.parameters.get(simple_ref(ref_path));
                    if found.is_none() {
                        warn!("Parameter reference cannot be resolved: {ref_path}");
                    }
                    found?
                }
            };
            Some(ApiParameter {
                name: param.name.clone(),
                location: param.location,
                required: param.required,
                description: param.description.clone(),
                param_type: parameter_type(param),
                default_value: param.default_value.as_ref().map(value_to_text),
            })
        })
        .collect()
}

fn resolve_response<'a>(
    spec: &'a SwaggerSpec,
    response: &'a ResponseOrRef,
) -> Option<&'a Response> {
    match response {
        ResponseOrRef::Response(r) => Some(r),
        ResponseOrRef::Ref { ref_path } => {
            let found = spec.responses.get(simple_ref(ref_path));
            if found.is_none() {
                warn!("Response reference cannot be resolved: {ref_path}");
            }
            found
        }
    }
}
