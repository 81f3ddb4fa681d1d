/// Use cases module containing application business logic orchestration
mod check_licenses;

pub use check_licenses::CheckLicensesUseCase;
