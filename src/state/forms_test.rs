use super::*;

fn valid_contact() -> ContactForm {
    ContactForm {
        name: "سارة".to_owned(),
        email: "sara@example.edu".to_owned(),
        subject: "استفسار".to_owned(),
        message: "متى يبدأ التسجيل؟".to_owned(),
    }
}

fn valid_application() -> ApplicationForm {
    ApplicationForm {
        name: "Omar".to_owned(),
        email: "omar@example.com".to_owned(),
        phone: "0500000000".to_owned(),
        grade: "85".to_owned(),
        motivation: "I want to teach computing.".to_owned(),
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@dept.uni.edu"));
    assert!(is_valid_email("x@y.z"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for email in ["plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a b@c.d", "a@b@c.d", " a@b.co", "a@b.co\n"] {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}

#[test]
fn email_rejects_unicode_spaces_and_byte_order_mark() {
    for email in ["a\u{FEFF}b@c.de", "ab@c\u{FEFF}.de", "a\u{00A0}b@c.de", "ab@c.d\u{2003}e"] {
        assert!(!is_valid_email(email), "{email:?} should be rejected");
    }
}

// =============================================================
// Grade
// =============================================================

#[test]
fn grade_bounds_are_inclusive() {
    assert_eq!(parse_grade("50"), Some(50.0));
    assert_eq!(parse_grade("100"), Some(100.0));
    assert_eq!(parse_grade(" 85.5 "), Some(85.5));
}

#[test]
fn grade_rejects_absent_non_numeric_and_out_of_range() {
    for raw in ["", "   ", "abc", "45", "49.99", "100.01", "-70", "NaN", "inf"] {
        assert_eq!(parse_grade(raw), None, "{raw:?} should be rejected");
    }
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn contact_form_valid_is_accepted() {
    assert_eq!(submit_contact(&valid_contact()), SubmitOutcome::Accepted(CONTACT_SUCCESS));
}

#[test]
fn contact_form_collects_every_error_in_field_order() {
    let form = ContactForm { email: "not-an-email".to_owned(), ..ContactForm::default() };
    let errors = form.validate().expect_err("empty form must fail");
    assert_eq!(
        errors.fields(),
        &[
            FieldError::NameRequired,
            FieldError::EmailInvalid,
            FieldError::SubjectRequired,
            FieldError::MessageRequired,
        ]
    );
}

#[test]
fn contact_form_missing_email_is_required_not_invalid() {
    let form = ContactForm { email: "   ".to_owned(), ..valid_contact() };
    let errors = form.validate().expect_err("blank email must fail");
    assert!(errors.contains(FieldError::EmailRequired));
    assert!(!errors.contains(FieldError::EmailInvalid));
}

#[test]
fn contact_form_whitespace_only_fields_are_blank() {
    let form = ContactForm { subject: " \t ".to_owned(), ..valid_contact() };
    assert_eq!(form.validate().expect_err("blank subject").fields(), &[FieldError::SubjectRequired]);
}

#[test]
fn rejected_banner_is_header_plus_one_line_per_error() {
    let form = ContactForm { name: "n".to_owned(), ..ContactForm::default() };
    let SubmitOutcome::Rejected(text) = submit_contact(&form) else {
        panic!("form with missing fields must be rejected");
    };
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], ERRORS_HEADER);
    assert_eq!(&lines[1..], &["البريد الإلكتروني مطلوب", "الموضوع مطلوب", "الرسالة مطلوبة"]);
}

// =============================================================
// Application form
// =============================================================

#[test]
fn application_grade_45_is_rejected() {
    let form = ApplicationForm { grade: "45".to_owned(), ..valid_application() };
    let errors = form.validate().expect_err("45 is below range");
    assert_eq!(errors.fields(), &[FieldError::GradeOutOfRange]);
}

#[test]
fn application_grade_85_with_all_fields_is_accepted() {
    assert_eq!(submit_application(&valid_application()), SubmitOutcome::Accepted(APPLICATION_SUCCESS));
}

#[test]
fn application_grade_error_iff_absent_non_numeric_or_out_of_range() {
    for (grade, should_fail) in [("", true), ("x", true), ("49", true), ("101", true), ("50", false), ("100", false)] {
        let form = ApplicationForm { grade: grade.to_owned(), ..valid_application() };
        assert_eq!(form.validate().is_err(), should_fail, "grade {grade:?}");
    }
}

#[test]
fn application_requires_phone_and_motivation() {
    let form = ApplicationForm { phone: String::new(), motivation: " ".to_owned(), ..valid_application() };
    let errors = form.validate().expect_err("missing phone and motivation");
    assert_eq!(errors.fields(), &[FieldError::PhoneRequired, FieldError::MotivationRequired]);
}

#[test]
fn empty_application_lists_all_five_errors() {
    let errors = ApplicationForm::default().validate().expect_err("empty form");
    assert_eq!(errors.fields().len(), 5);
    assert_eq!(errors.to_string().lines().count(), 6);
}
