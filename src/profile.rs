//! Profile completion: form draft, validation and the two-request submit flow

use crate::api::BankApi;
use crate::error::{FieldError, FieldErrorKind, ProfileError, SubmitStep, ValidationErrors};
use crate::model::{Account, AccountRequest, AccountType, Currency, ProfileRequest, UserProfile};
use crate::session::Session;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Form fields of the profile completion page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Phone,
    Address,
    DateOfBirth,
    AccountType,
    InitialBalance,
    Currency,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Phone,
        FormField::Address,
        FormField::DateOfBirth,
        FormField::AccountType,
        FormField::InitialBalance,
        FormField::Currency,
    ];

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Phone => "Phone Number",
            FormField::Address => "Address",
            FormField::DateOfBirth => "Date of Birth",
            FormField::AccountType => "Account Type",
            FormField::InitialBalance => "Initial Balance",
            FormField::Currency => "Currency",
        }
    }
}

/// Raw values of the form, exactly as typed or selected
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    pub account_type: String,
    pub initial_balance: String,
    pub currency: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            date_of_birth: String::new(),
            account_type: AccountType::default().code().to_string(),
            initial_balance: String::new(),
            currency: Currency::default().code().to_string(),
        }
    }
}

/// Rule applied to a field's raw value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Required,
    /// Decimal number no lower than the bound
    DecimalAtLeast(Decimal),
    OneOf(&'static [&'static str]),
    /// `YYYY-MM-DD`
    Date,
}

impl FormField {
    pub fn constraints(self) -> &'static [Constraint] {
        const NAME: &[Constraint] = &[Constraint::Required];
        const DATE: &[Constraint] = &[Constraint::Date];
        const ACCOUNT_TYPE: &[Constraint] =
            &[Constraint::Required, Constraint::OneOf(AccountType::CODES)];
        const BALANCE: &[Constraint] = &[Constraint::Required, Constraint::DecimalAtLeast(Decimal::ZERO)];
        const CURRENCY: &[Constraint] = &[Constraint::Required, Constraint::OneOf(Currency::CODES)];
        match self {
            FormField::Name | FormField::Phone | FormField::Address => NAME,
            FormField::DateOfBirth => DATE,
            FormField::AccountType => ACCOUNT_TYPE,
            FormField::InitialBalance => BALANCE,
            FormField::Currency => CURRENCY,
        }
    }
}

fn check(constraint: Constraint, value: &str) -> Result<(), FieldErrorKind> {
    match constraint {
        Constraint::Required if value.is_empty() => Err(FieldErrorKind::Required),
        Constraint::Required => Ok(()),
        // the remaining rules only judge values that are present
        _ if value.is_empty() => Ok(()),
        Constraint::DecimalAtLeast(min) => match Decimal::from_str(value) {
            Ok(number) if number < min => Err(FieldErrorKind::BelowMinimum(min.to_string())),
            Ok(_) => Ok(()),
            Err(_) => Err(FieldErrorKind::NotANumber),
        },
        Constraint::OneOf(options) if options.contains(&value) => Ok(()),
        Constraint::OneOf(options) => Err(FieldErrorKind::NotOneOf(options)),
        Constraint::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| FieldErrorKind::InvalidDate),
    }
}

/// Form content after every constraint passed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProfile {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub account_type: AccountType,
    pub initial_balance: Decimal,
    pub currency: Currency,
}

impl ValidatedProfile {
    pub fn profile_request(&self) -> ProfileRequest {
        ProfileRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    pub fn account_request(&self) -> AccountRequest {
        AccountRequest {
            account_type: self.account_type,
            balance: self.initial_balance,
            currency: self.currency,
        }
    }
}

impl ProfileForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::AccountType => &self.account_type,
            FormField::InitialBalance => &self.initial_balance,
            FormField::Currency => &self.currency,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
            FormField::DateOfBirth => &mut self.date_of_birth,
            FormField::AccountType => &mut self.account_type,
            FormField::InitialBalance => &mut self.initial_balance,
            FormField::Currency => &mut self.currency,
        };
        *slot = value;
    }

    /// Checks every field and reports all failures in form order
    pub fn validate(&self) -> Result<ValidatedProfile, ValidationErrors> {
        let mut errors = Vec::new();
        for field in FormField::ALL {
            let value = self.value(field).trim();
            for &constraint in field.constraints() {
                if let Err(kind) = check(constraint, value) {
                    errors.push(FieldError::new(field, kind));
                    break;
                }
            }
        }
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let invalid = |field| ValidationErrors(vec![FieldError::new(field, FieldErrorKind::Required)]);
        let date_of_birth = match self.date_of_birth.trim() {
            "" => None,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        };
        Ok(ValidatedProfile {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            date_of_birth,
            account_type: AccountType::from_code(self.account_type.trim())
                .ok_or_else(|| invalid(FormField::AccountType))?,
            initial_balance: Decimal::from_str(self.initial_balance.trim())
                .map_err(|_| invalid(FormField::InitialBalance))?,
            currency: Currency::from_code(self.currency.trim())
                .ok_or_else(|| invalid(FormField::Currency))?,
        })
    }
}

/// What the profile page does when it mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileGate {
    ShowForm,
    RedirectToLogin,
}

impl ProfileGate {
    pub fn check(session: &Session) -> Self {
        if session.token().is_some() {
            ProfileGate::ShowForm
        } else {
            ProfileGate::RedirectToLogin
        }
    }

    /// The form is only rendered once a token is known
    pub fn shows_form(self) -> bool {
        self == ProfileGate::ShowForm
    }
}

/// Result of a completed submission
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub profile: UserProfile,
    pub account: Account,
}

/// Validates the form, then creates the profile and the account in that order.
///
/// Nothing is sent when validation fails. A failed account request after a
/// successful profile request is reported as is; the profile is not undone.
pub async fn submit_profile(
    form: &ProfileForm,
    session: &Session,
    api: &dyn BankApi,
) -> Result<Completed, ProfileError> {
    let token = session.token().ok_or(ProfileError::MissingAuth)?;
    let validated = form.validate()?;

    let profile = api
        .create_profile(&token, &validated.profile_request())
        .await
        .map_err(|source| ProfileError::Request {
            step: SubmitStep::Profile,
            source,
        })?;
    session.store_user(&profile);
    log::info!("Profile saved for '{}'", profile.name);

    let account = api
        .create_account(&token, &validated.account_request())
        .await
        .map_err(|source| ProfileError::Request {
            step: SubmitStep::Account,
            source,
        })?;
    log::info!(
        "{} account created ({:?})",
        validated.account_type.label(),
        account.account_number
    );

    Ok(Completed { profile, account })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;
    use crate::error::{ApiError, describe};
    use crate::session::MemoryStore;

    fn filled() -> ProfileForm {
        ProfileForm {
            name: "Ada Lovelace".to_string(),
            phone: "+441234567890".to_string(),
            address: "12 St James's Square, London".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            account_type: "CHECKING".to_string(),
            initial_balance: "1000.50".to_string(),
            currency: "GBP".to_string(),
        }
    }

    fn logged_in() -> Session {
        let session = Session::new(MemoryStore::default());
        session.set_token("tok");
        session
    }

    #[test]
    fn test_defaults_select_savings_and_usd() {
        let form = ProfileForm::default();
        assert_eq!(form.account_type, "SAVINGS");
        assert_eq!(form.currency, "USD");
    }

    #[test]
    fn test_valid_form() {
        let validated = filled().validate().unwrap();
        assert_eq!(validated.account_type, AccountType::Checking);
        assert_eq!(validated.currency, Currency::Gbp);
        assert_eq!(validated.initial_balance, Decimal::new(100050, 2));
        assert_eq!(validated.date_of_birth, NaiveDate::from_ymd_opt(1815, 12, 10));
    }

    #[test]
    fn test_date_of_birth_is_optional() {
        let mut form = filled();
        form.date_of_birth.clear();
        assert_eq!(form.validate().unwrap().date_of_birth, None);
    }

    #[test]
    fn test_every_required_field_is_checked() {
        let required = [
            FormField::Name,
            FormField::Phone,
            FormField::Address,
            FormField::AccountType,
            FormField::InitialBalance,
            FormField::Currency,
        ];
        // every non-empty subset of required fields left blank
        for mask in 1u32..(1 << required.len()) {
            let mut form = filled();
            let mut blanked = Vec::new();
            for (i, field) in required.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    form.set(*field, "   ".to_string());
                    blanked.push(*field);
                }
            }
            let errors = form.validate().unwrap_err();
            let reported: Vec<FormField> = errors.0.iter().map(|e| e.field).collect();
            assert_eq!(reported, blanked, "mask {:b}", mask);
            assert!(errors.0.iter().all(|e| e.kind == FieldErrorKind::Required));
        }
    }

    #[test]
    fn test_balance_constraints() {
        let mut form = filled();
        form.initial_balance = "12abc".to_string();
        assert_eq!(
            form.validate().unwrap_err().0[0].kind,
            FieldErrorKind::NotANumber
        );
        form.initial_balance = "-0.01".to_string();
        assert_eq!(
            form.validate().unwrap_err().0[0].kind,
            FieldErrorKind::BelowMinimum("0".to_string())
        );
        form.initial_balance = "0".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_enum_membership() {
        let mut form = filled();
        form.currency = "JPY".to_string();
        form.account_type = "LOAN".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.0[0].field, FormField::AccountType);
        assert_eq!(errors.0[1].message(), "Currency must be one of USD, EUR, GBP, INR");
    }

    #[test]
    fn test_bad_date() {
        let mut form = filled();
        form.date_of_birth = "1815-13-40".to_string();
        assert_eq!(
            form.validate().unwrap_err().for_field(FormField::DateOfBirth).as_deref(),
            Some("Date of Birth must be a valid date (YYYY-MM-DD)")
        );
    }

    #[test]
    fn test_gate_needs_token() {
        let session = Session::new(MemoryStore::default());
        assert_eq!(ProfileGate::check(&session), ProfileGate::RedirectToLogin);
        session.set_token("tok");
        assert_eq!(ProfileGate::check(&session), ProfileGate::ShowForm);
    }

    #[test]
    fn test_no_form_without_token() {
        let session = Session::new(MemoryStore::default());
        assert!(!ProfileGate::check(&session).shows_form());
        session.set_token("   ");
        assert!(!ProfileGate::check(&session).shows_form());
        session.set_token("tok");
        assert!(ProfileGate::check(&session).shows_form());
    }

    #[test]
    fn test_form_schema_covers_every_field() {
        let optional: Vec<FormField> = FormField::ALL
            .into_iter()
            .filter(|f| !f.constraints().contains(&Constraint::Required))
            .collect();
        assert_eq!(optional, vec![FormField::DateOfBirth]);
        for field in FormField::ALL {
            assert!(!field.label().is_empty());
            assert!(!field.constraints().is_empty(), "{:?}", field);
        }
    }

    #[tokio::test]
    async fn test_successful_submission_calls_both_endpoints_in_order() {
        let api = FakeApi {
            profile: Ok(UserProfile {
                name: "Ada Lovelace".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let session = logged_in();
        let done = submit_profile(&filled(), &session, &api).await.unwrap();
        assert_eq!(done.account.account_number.as_deref(), Some("ACC-1"));
        assert_eq!(
            api.calls(),
            vec!["profile:tok:Ada Lovelace", "account:tok:CHECKING:GBP"]
        );
        assert_eq!(session.user().map(|u| u.name), Some("Ada Lovelace".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let api = FakeApi::default();
        let mut form = filled();
        form.phone.clear();
        let err = submit_profile(&form, &logged_in(), &api).await.unwrap_err();
        assert!(matches!(err, ProfileError::Validation(_)));
        assert_eq!(describe(&err), "Phone Number is required");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let api = FakeApi::default();
        let session = Session::new(MemoryStore::default());
        let err = submit_profile(&filled(), &session, &api).await.unwrap_err();
        assert_eq!(err, ProfileError::MissingAuth);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_profile_failure_skips_account() {
        let api = FakeApi {
            profile: Err(ApiError::Transport("Network Error".to_string())),
            ..Default::default()
        };
        let session = logged_in();
        let err = submit_profile(&filled(), &session, &api).await.unwrap_err();
        assert_eq!(describe(&err), "Network Error");
        assert_eq!(api.calls().len(), 1);
        assert_eq!(session.user(), None);
    }

    #[tokio::test]
    async fn test_account_failure_is_reported_without_rollback() {
        let api = FakeApi {
            account: Err(ApiError::Status {
                status: 400,
                message: Some("Initial balance too low for INVESTMENT".to_string()),
            }),
            ..Default::default()
        };
        let session = logged_in();
        let form = filled();
        let err = submit_profile(&form, &session, &api).await.unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Request {
                step: SubmitStep::Account,
                ..
            }
        ));
        assert_eq!(describe(&err), "Initial balance too low for INVESTMENT");
        // profile stays created and cached, form untouched for a retry
        assert_eq!(api.calls().len(), 2);
        assert!(session.user().is_some());
        assert_eq!(form, filled());
    }
}
