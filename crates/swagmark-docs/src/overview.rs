use swagmark_core::ir::ApiDoc;
use swagmark_core::markup::MarkupDocBuilder;

const OVERVIEW: &str = "Overview";
const VERSION_INFORMATION: &str = "Version information";
const CONTACT_INFORMATION: &str = "Contact information";
const LICENSE_INFORMATION: &str = "License information";
const URI_SCHEME: &str = "URI scheme";
const TAGS: &str = "Tags";
const CONSUMES: &str = "Consumes";
const PRODUCES: &str = "Produces";

/// Renders API metadata: info, contact, license, URI scheme, tags and the
/// global media types.
pub struct OverviewDocument<'a> {
    doc: &'a ApiDoc,
}

impl<'a> OverviewDocument<'a> {
    pub fn new(doc: &'a ApiDoc) -> Self {
        Self { doc }
    }

    pub fn build(&self, out: &mut MarkupDocBuilder) {
        let info = &self.doc.info;

        out.document_title(&info.title);
        out.section_title(1, OVERVIEW);
        if let Some(description) = non_blank(info.description.as_deref()) {
            out.paragraph(description);
        }

        out.section_title(2, VERSION_INFORMATION);
        out.text_line(&format!("Version: {}", info.version));

        self.contact_section(out);
        self.license_section(out);
        self.uri_scheme_section(out);
        self.tags_section(out);

        if !self.doc.consumes.is_empty() {
            out.section_title(2, CONSUMES);
            out.unordered_list(&self.doc.consumes);
        }
        if !self.doc.produces.is_empty() {
            out.section_title(2, PRODUCES);
            out.unordered_list(&self.doc.produces);
        }
    }

    fn contact_section(&self, out: &mut MarkupDocBuilder) {
        let Some(contact) = &self.doc.info.contact else {
            return;
        };
        let name = non_blank(contact.name.as_deref());
        let email = non_blank(contact.email.as_deref());
        if name.is_none() && email.is_none() {
            return;
        }

        out.section_title(2, CONTACT_INFORMATION);
        if let Some(name) = name {
            out.text_line(&format!("Contact: {name}"));
        }
        if let Some(email) = email {
            out.text_line(&format!("Contact Email: {email}"));
        }
    }

    fn license_section(&self, out: &mut MarkupDocBuilder) {
        let info = &self.doc.info;
        let license = info.license.as_ref();
        let terms = non_blank(info.terms_of_service.as_deref());
        if license.is_none() && terms.is_none() {
            return;
        }

        out.section_title(2, LICENSE_INFORMATION);
        if let Some(license) = license {
            if let Some(name) = non_blank(Some(&license.name)) {
                out.text_line(&format!("License: {name}"));
            }
            if let Some(url) = non_blank(license.url.as_deref()) {
                out.text_line(&format!("License URL: {url}"));
            }
        }
        if let Some(terms) = terms {
            out.text_line(&format!("Terms of service: {terms}"));
        }
    }

    fn uri_scheme_section(&self, out: &mut MarkupDocBuilder) {
        let host = non_blank(self.doc.host.as_deref());
        let base_path = non_blank(self.doc.base_path.as_deref());
        if host.is_none() && base_path.is_none() && self.doc.schemes.is_empty() {
            return;
        }

        out.section_title(2, URI_SCHEME);
        if let Some(host) = host {
            out.text_line(&format!("Host: {host}"));
        }
        if let Some(base_path) = base_path {
            out.text_line(&format!("BasePath: {base_path}"));
        }
        if !self.doc.schemes.is_empty() {
            let schemes: Vec<String> = self.doc.schemes.iter().map(|s| s.to_uppercase()).collect();
            out.text_line(&format!("Schemes: {}", schemes.join(", ")));
        }
    }

    fn tags_section(&self, out: &mut MarkupDocBuilder) {
        if self.doc.tags.is_empty() {
            return;
        }
        let items: Vec<String> = self
            .doc
            .tags
            .iter()
            .map(|tag| match non_blank(tag.description.as_deref()) {
                Some(description) => format!("{}: {description}", tag.name),
                None => tag.name.clone(),
            })
            .collect();
        out.section_title(2, TAGS);
        out.unordered_list(&items);
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
