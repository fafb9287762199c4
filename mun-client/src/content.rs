/// Static pages bundled with the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Document {
    DelegateGuidelines,
    PrivacyPolicy,
    TermsOfService,
}

impl Document {
    pub fn title(&self) -> &'static str {
        match self {
            Document::DelegateGuidelines => "Delegate Guidelines",
            Document::PrivacyPolicy => "Privacy Policy",
            Document::TermsOfService => "Terms of Service",
        }
    }

    pub fn html(&self) -> &'static str {
        match self {
            Document::DelegateGuidelines => include_str!("../content/delegate_guidelines.html"),
            Document::PrivacyPolicy => include_str!("../content/privacy_policy.html"),
            Document::TermsOfService => include_str!("../content/terms_of_service.html"),
        }
    }
}

/// Modal showing one document; registration asks the delegate to read both policies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentModal {
    open: Option<Document>,
}

impl DocumentModal {
    pub fn open(&mut self, doc: Document) {
        self.open = Some(doc);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn showing(&self) -> Option<(&'static str, &'static str)> {
        self.open.map(|d| (d.title(), d.html()))
    }
}
