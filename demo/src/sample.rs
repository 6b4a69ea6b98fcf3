//! A small order domain used by `fieldptr sample`.
//!
//! The types describe themselves by hand and `check_order` plays the part
//! of the validation engine, reporting go-style namespaces prefixed with
//! the root type name.

use fieldptr_contracts::{FailureRecord, FieldPtrResult, TypeSchema};
use fieldptr_core::{Described, FnEngine, ResolverOptions, ValidationReportBuilder};

type CheckFn = fn(&Order) -> FieldPtrResult<Vec<FailureRecord>>;

pub struct Address {
    pub street: String,
    pub zip: String,
}

pub struct Customer {
    pub email: String,
    pub password: String,
    pub addresses: Vec<Address>,
}

pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
}

pub struct Order {
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub note: Option<String>,
}

impl Described for Address {
    fn type_schema() -> TypeSchema {
        TypeSchema::object()
            .named("Address")
            .renamed("Street", "street", String::type_schema())
            .renamed("Zip", "zip_code", String::type_schema())
            .into()
    }
}

impl Described for Customer {
    fn type_schema() -> TypeSchema {
        TypeSchema::object()
            .named("Customer")
            .renamed("Email", "email", String::type_schema())
            .hidden("Password")
            .renamed("Addresses", "addresses", Vec::<Address>::type_schema())
            .into()
    }
}

impl Described for LineItem {
    fn type_schema() -> TypeSchema {
        TypeSchema::object()
            .named("LineItem")
            .field("sku", String::type_schema())
            .renamed("Quantity", "qty", u32::type_schema())
            .into()
    }
}

impl Described for Order {
    fn type_schema() -> TypeSchema {
        TypeSchema::object()
            .named("Order")
            .renamed("Customer", "customer", Customer::type_schema())
            .renamed("Items", "items", Vec::<LineItem>::type_schema())
            .renamed("Note", "note", Option::<String>::type_schema())
            .into()
    }
}

/// An order with a handful of problems.
pub fn sample_order() -> Order {
    Order {
        customer: Customer {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
            addresses: vec![
                Address {
                    street: "1 Main St".to_string(),
                    zip: "12345".to_string(),
                },
                Address {
                    street: String::new(),
                    zip: "9".to_string(),
                },
            ],
        },
        items: vec![LineItem {
            sku: "SKU-1".to_string(),
            quantity: 0,
        }],
        note: None,
    }
}

/// Namespaces mirror the identifiers used in the `Described` impls above.
pub fn check_order(order: &Order) -> FieldPtrResult<Vec<FailureRecord>> {
    let mut failures = Vec::new();
    let customer = &order.customer;

    if !customer.email.contains('@') {
        failures.push(
            FailureRecord::new("Order.Customer.Email", "email").with_value(customer.email.clone()),
        );
    }
    if customer.password.len() < 12 {
        failures.push(
            FailureRecord::new("Order.Customer.Password", "min")
                .with_param("12")
                .with_message("password is too short"),
        );
    }
    for (i, address) in customer.addresses.iter().enumerate() {
        if address.street.is_empty() {
            failures.push(FailureRecord::new(
                format!("Order.Customer.Addresses[{i}].Street"),
                "required",
            ));
        }
        if address.zip.len() != 5 {
            failures.push(
                FailureRecord::new(format!("Order.Customer.Addresses[{i}].Zip"), "len")
                    .with_param("5")
                    .with_value(address.zip.clone()),
            );
        }
    }
    for (i, item) in order.items.iter().enumerate() {
        if item.sku.is_empty() {
            failures.push(FailureRecord::new(format!("Order.Items[{i}].sku"), "required"));
        }
        if item.quantity == 0 {
            failures.push(
                FailureRecord::new(format!("Order.Items[{i}].Quantity"), "gt")
                    .with_param("0")
                    .with_value(item.quantity),
            );
        }
    }
    if let Some(note) = &order.note {
        if note.len() > 500 {
            failures.push(FailureRecord::new("Order.Note", "max").with_param("500"));
        }
    }
    Ok(failures)
}

/// A report builder over `check_order` that understands its type-prefixed
/// namespaces.
pub fn builder() -> ValidationReportBuilder<FnEngine<CheckFn>> {
    ValidationReportBuilder::new(FnEngine::new(check_order as CheckFn)).with_options(
        ResolverOptions {
            strip_type_prefix: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_points_into_external_names() {
        let report = builder().build_described(&sample_order()).unwrap();
        let pointers: Vec<_> = report.iter().map(|e| e.pointer.as_str()).collect();

        assert_eq!(
            pointers,
            vec![
                "/customer/email",
                "/customer",
                "/customer/addresses[1]/street",
                "/customer/addresses[1]/zip_code",
                "/items[0]/qty",
            ]
        );
    }

    #[test]
    fn hidden_password_failure_keeps_its_message() {
        let report = builder().build_described(&sample_order()).unwrap();
        let entry = &report.entries[1];

        assert_eq!(entry.failure.namespace, "Order.Customer.Password");
        assert!(report.message().contains("Error at '/customer': password is too short\n"));
    }

    #[test]
    fn fixed_order_is_valid() {
        let mut order = sample_order();
        order.customer.email = "ada@example.com".to_string();
        order.customer.password = "correct horse battery".to_string();
        order.customer.addresses[1].street = "2 Side St".to_string();
        order.customer.addresses[1].zip = "54321".to_string();
        order.items[0].quantity = 3;

        let report = builder().build_described(&order).unwrap();
        assert!(report.is_valid(), "unexpected failures:\n{report}");
    }
}
