//! Contact and application form validation.
//!
//! Submission is simulated: a form either produces one success message or
//! one aggregated error message listing every failed field. Messages are in
//! Arabic to match the page copy.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Header line preceding the list of field errors.
pub const ERRORS_HEADER: &str = "يرجى تصحيح الأخطاء التالية:";

pub const CONTACT_SUCCESS: &str = "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.";

pub const APPLICATION_SUCCESS: &str = "تم تقديم طلبك بنجاح! سنتواصل معك لاستكمال إجراءات القبول.";

/// Shown on development hosts when an uncaught script error occurs.
pub const TECHNICAL_ERROR: &str = "حدث خطأ تقني. يرجى تحديث الصفحة والمحاولة مرة أخرى.";

/// Inclusive bounds for the high-school grade.
pub const GRADE_MIN: f64 = 50.0;
pub const GRADE_MAX: f64 = 100.0;

/// A single failed check. `Display` is the localized message line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("الاسم مطلوب")]
    NameRequired,
    #[error("البريد الإلكتروني مطلوب")]
    EmailRequired,
    #[error("البريد الإلكتروني غير صحيح")]
    EmailInvalid,
    #[error("الموضوع مطلوب")]
    SubjectRequired,
    #[error("الرسالة مطلوبة")]
    MessageRequired,
    #[error("رقم الهاتف مطلوب")]
    PhoneRequired,
    #[error("درجة الثانوية العامة يجب أن تكون بين 50 و 100")]
    GradeOutOfRange,
    #[error("يرجى كتابة دوافعك لدراسة معلم الحاسب الآلي")]
    MotivationRequired,
}

/// Every failed check of one submission, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[cfg(test)]
    pub(crate) fn fields(&self) -> &[FieldError] {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(ERRORS_HEADER)?;
        for error in &self.0 {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whitespace as browsers' `\s` sees it: Unicode `White_Space` plus the
/// byte-order mark.
fn is_email_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// `local@domain.tld` with no whitespace or extra `@` in any part and every
/// part non-empty. The domain may itself contain dots.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| is_email_space(c) || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Parse a grade field. Absent, non-numeric and out-of-range values are all
/// rejected.
#[must_use]
pub fn parse_grade(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(grade) = trimmed.parse::<f64>() else {
        return None;
    };
    (grade.is_finite() && (GRADE_MIN..=GRADE_MAX).contains(&grade)).then_some(grade)
}

fn check_name_and_email(name: &str, email: &str, errors: &mut ValidationErrors) {
    if is_blank(name) {
        errors.push(FieldError::NameRequired);
    }
    if is_blank(email) {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.push(FieldError::EmailInvalid);
    }
}

/// Values of the general contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns every failed check when any field is invalid.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_name_and_email(&self.name, &self.email, &mut errors);
        if is_blank(&self.subject) {
            errors.push(FieldError::SubjectRequired);
        }
        if is_blank(&self.message) {
            errors.push(FieldError::MessageRequired);
        }
        errors.into_result()
    }
}

/// Values of the program application form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Raw grade text as typed.
    pub grade: String,
    pub motivation: String,
}

impl ApplicationForm {
    /// # Errors
    ///
    /// Returns every failed check when any field is invalid.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_name_and_email(&self.name, &self.email, &mut errors);
        if is_blank(&self.phone) {
            errors.push(FieldError::PhoneRequired);
        }
        if parse_grade(&self.grade).is_none() {
            errors.push(FieldError::GradeOutOfRange);
        }
        if is_blank(&self.motivation) {
            errors.push(FieldError::MotivationRequired);
        }
        errors.into_result()
    }
}

/// What the page shows after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show this success banner, reset the form (and close its modal).
    Accepted(&'static str),
    /// Show this aggregated error banner; leave the form untouched.
    Rejected(String),
}

impl SubmitOutcome {
    fn from_validation(result: Result<(), ValidationErrors>, success: &'static str) -> Self {
        match result {
            Ok(()) => Self::Accepted(success),
            Err(errors) => Self::Rejected(errors.to_string()),
        }
    }
}

#[must_use]
pub fn submit_contact(form: &ContactForm) -> SubmitOutcome {
    SubmitOutcome::from_validation(form.validate(), CONTACT_SUCCESS)
}

#[must_use]
pub fn submit_application(form: &ApplicationForm) -> SubmitOutcome {
    SubmitOutcome::from_validation(form.validate(), APPLICATION_SUCCESS)
}
