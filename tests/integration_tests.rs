use money_scalar::{
    Amount, CodecError, Currency, CurrencyRegistry, CurrencyTable, ErrorKind, FromScalar, Money,
    MoneyField, Scalar, Scan, ToScalar, registry,
};
use std::sync::Arc;

fn setup() -> Arc<dyn CurrencyRegistry> {
    let table: CurrencyTable = [
        Currency::new("USD", 2, "$"),
        Currency::new("EUR", 2, "€"),
        Currency::new("JPY", 0, "¥"),
        Currency::new("BHD", 3, ".د.ب"),
    ]
    .into_iter()
    .collect();

    Arc::new(table)
}

fn kind_of<T: FromScalar>(scalar: Scalar, registry: &dyn CurrencyRegistry) -> ErrorKind {
    match T::decode(&scalar, registry) {
        Ok(_) => panic!("{} decoded into {}", scalar, T::TARGET),
        Err(err) => err.kind(),
    }
}

#[test]
fn test_amount_round_trip_extremes() {
    let registry = setup();
    for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, 99, i64::MAX - 1, i64::MAX] {
        let encoded = Amount::new(v).to_scalar();
        let decoded = Amount::decode(&encoded, registry.as_ref()).unwrap();
        assert_eq!(decoded.value(), v);

        // the text form of the same value decodes identically
        let text = Scalar::Text(v.to_string());
        assert_eq!(Amount::decode(&text, registry.as_ref()).unwrap(), decoded);
    }
}

#[test]
fn test_amount_round_trip_across_range() {
    let registry = setup();
    // about 4k values spread evenly over the whole i64 range, plus their neighbours
    for v in (i64::MIN..=i64::MAX).step_by(1usize << 52) {
        for candidate in [v, v.wrapping_add(1), v.wrapping_sub(1), -v.saturating_add(1)] {
            let encoded = Amount::new(candidate).to_scalar();
            assert_eq!(
                Amount::decode(&encoded, registry.as_ref()).unwrap().value(),
                candidate
            );
            assert_eq!(
                Amount::decode(&Scalar::Text(candidate.to_string()), registry.as_ref())
                    .unwrap()
                    .value(),
                candidate
            );
        }
    }
}

#[test]
fn test_currency_round_trip() {
    let registry = setup();
    for code in ["USD", "EUR", "JPY", "BHD"] {
        let first = Currency::decode(&code.to_scalar(), &registry).unwrap();
        let second = Currency::decode(&first.to_scalar(), &registry).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.fraction(), second.fraction());
    }
}

#[test]
fn test_combined_money_matches_separate_columns() {
    let registry = setup();
    let money = Money::decode(&"JPY 5000".to_scalar(), &registry).unwrap();

    // writing the halves to their own columns and reading them back agrees
    let currency_column = money.currency().unwrap().to_scalar();
    let amount_column = money.amount().to_scalar();
    let rebuilt = Money::new(
        Amount::decode(&amount_column, &registry).unwrap(),
        Currency::decode(&currency_column, &registry).unwrap(),
    );
    assert_eq!(rebuilt, money);

    // composing the combined string by hand round-trips as well
    let combined = format!(
        "{} {}",
        money.currency().unwrap().code(),
        money.amount().value()
    );
    assert_eq!(Money::decode(&combined.to_scalar(), &registry).unwrap(), money);
}

#[test]
fn test_strict_two_token_rule() {
    let registry = setup();

    let money = Money::decode(&"USD 100".to_scalar(), &registry).unwrap();
    assert_eq!(money.currency().map(Currency::code), Some("USD"));
    assert_eq!(money.amount(), Amount::new(100));

    for raw in ["USD", "USD 100 extra", "USD  100", ""] {
        assert_eq!(
            kind_of::<Money>(raw.to_scalar(), registry.as_ref()),
            ErrorKind::MalformedMoneyScalar,
            "raw {:?}",
            raw
        );
    }
}

#[test]
fn test_integer_passthrough() {
    let registry = setup();
    let wide = Money::decode(&500i64.to_scalar(), &registry).unwrap();
    let narrow = Money::decode(&500i32.to_scalar(), &registry).unwrap();

    assert_eq!(wide.amount(), Amount::new(500));
    assert!(wide.currency().is_none());
    assert_eq!(wide, narrow);

    // the application supplies the column default itself
    let usd = Currency::decode(&"USD".to_scalar(), &registry).unwrap();
    let resolved = wide.with_currency(usd.clone());
    assert_eq!(resolved.currency(), Some(&usd));
}

#[test]
fn test_unknown_currency_leaves_target_untouched() {
    let registry = setup();
    let mut money = Money::decode(&"EUR 1".to_scalar(), &registry).unwrap();
    let before = money.clone();

    let err = money.scan(&"XXX 100".to_scalar(), &registry).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownCurrency);
    assert_eq!(err.failed_field(), Some(MoneyField::Currency));
    assert_eq!(money, before);
    assert_eq!(money.amount(), Amount::new(1));
}

#[test]
fn test_type_rejection_everywhere() {
    let registry = setup();
    for scalar in [Scalar::F64(100.0), Scalar::F32(1.5), Scalar::Bool(true)] {
        assert_eq!(
            kind_of::<Amount>(scalar.clone(), registry.as_ref()),
            ErrorKind::UnsupportedScalarType
        );
        assert_eq!(
            kind_of::<Currency>(scalar.clone(), registry.as_ref()),
            ErrorKind::UnsupportedScalarType
        );
        assert_eq!(
            kind_of::<Money>(scalar, registry.as_ref()),
            ErrorKind::UnsupportedScalarType
        );
    }
}

#[test]
fn test_amount_string_parse() {
    let registry = setup();
    assert_eq!(
        Amount::decode(&"123".to_scalar(), &registry).unwrap(),
        Amount::new(123)
    );
    for raw in ["12a", "", " 1"] {
        assert_eq!(
            kind_of::<Amount>(raw.to_scalar(), registry.as_ref()),
            ErrorKind::InvalidAmountFormat
        );
    }
}

#[test]
fn test_failed_scans_are_idempotent() {
    let registry = setup();

    let mut currency = Currency::decode(&"USD".to_scalar(), &registry).unwrap();
    assert!(currency.scan(&"ZZZ".to_scalar(), &registry).is_err());
    assert!(currency.scan(&Scalar::I64(840), &registry).is_err());
    assert_eq!(currency.code(), "USD");

    let mut amount = Amount::new(42);
    assert!(amount.scan(&"4 2".to_scalar(), &registry).is_err());
    assert!(amount.scan(&Scalar::Null, &registry).is_err());
    assert_eq!(amount, Amount::new(42));
}

#[test]
fn test_error_messages_carry_raw_values() {
    let registry = setup();

    let err = Money::decode(&"USD 100 extra".to_scalar(), &registry).unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"USD 100 extra\" is not valid to scan into Money"
    );

    let err = Money::decode(&"USD 12a".to_scalar(), &registry).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Field {
            field: MoneyField::Amount,
            ..
        }
    ));
    assert!(err.to_string().contains("\"12a\""));

    let err = Money::decode(&Scalar::Bool(false), &registry).unwrap_err();
    assert_eq!(err.to_string(), "bool false is not a supported type for Money");
}

#[test]
fn test_unsupported_type_messages_carry_raw_values() {
    let registry = setup();
    let scalar = Scalar::F64(12.75);

    let messages = [
        Amount::decode(&scalar, &registry).unwrap_err().to_string(),
        Currency::decode(&scalar, &registry).unwrap_err().to_string(),
        Money::decode(&scalar, &registry).unwrap_err().to_string(),
    ];
    for msg in messages {
        assert!(msg.contains("12.75"), "raw value missing from {:?}", msg);
        assert!(msg.starts_with("float64 12.75 is not a supported type for"));
    }

    let err = Currency::decode(&Scalar::I32(840), &registry).unwrap_err();
    assert_eq!(
        err.to_string(),
        "int32 840 is not a supported type for a Currency (store the currency code as a string)"
    );
}

#[test]
fn test_function_registry() {
    // an existing process-wide lookup can be injected as a plain function
    fn get_currency(code: &str) -> Option<Currency> {
        match code {
            "GBP" => Some(Currency::new("GBP", 2, "£")),
            _ => None,
        }
    }

    let lookup = registry::from_fn(get_currency);
    let money = Money::decode(&"GBP 99".to_scalar(), &lookup).unwrap();
    assert_eq!(money.currency().map(Currency::grapheme), Some("£"));

    let err = Money::decode(&"USD 99".to_scalar(), &lookup).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownCurrency);
}

#[test]
fn test_concurrent_decodes_share_registry() {
    let registry = setup();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let raw = format!("EUR {}", i * 100);
                Money::decode(&raw.to_scalar(), &registry).map(|m| m.amount().value())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), i as i64 * 100);
    }
}
