use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["hortops"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.catalog.is_none());
}

#[test]
fn parses_mix_with_products_in_order() {
    let cli = Cli::try_parse_from([
        "hortops",
        "mix",
        "--tank",
        "25",
        "--product",
        "glyphosate-41",
        "--product",
        "triclopyr-3a",
    ])
    .expect("expected valid cli args");

    if let Some(Commands::Mix {
        tank,
        ref products,
        ref rates,
        format,
    }) = cli.command
    {
        assert_eq!(tank, Some(25.0));
        assert_eq!(products, &["glyphosate-41", "triclopyr-3a"]);
        assert!(rates.is_empty());
        assert_eq!(format, OutputFormat::Text);
    } else {
        panic!("unexpected command variant");
    }
}

#[test]
fn parses_mix_without_tank() {
    let cli = Cli::try_parse_from(["hortops", "mix", "--product", "neem-oil"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Mix { tank: None, .. })
    ));
}

#[test]
fn parses_mix_negative_tank() {
    let cli = Cli::try_parse_from(["hortops", "mix", "--tank", "-5"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Mix { tank: Some(t), .. }) if t == -5.0
    ));
}

#[test]
fn parses_mix_adhoc_rates_and_format() {
    let cli = Cli::try_parse_from([
        "hortops",
        "mix",
        "--tank",
        "2",
        "--rate",
        "Iron=1.5",
        "--rate",
        "Neem=1-2 oz per gallon",
        "--format",
        "json",
    ])
    .unwrap();

    if let Some(Commands::Mix {
        ref rates, format, ..
    }) = cli.command
    {
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].default_rate_per_gallon, Some(1.5));
        assert_eq!(rates[1].mix_rate.as_deref(), Some("1-2 oz per gallon"));
        assert_eq!(format, OutputFormat::Json);
    } else {
        panic!("unexpected command variant");
    }
}

#[test]
fn rejects_malformed_adhoc_rate() {
    let result = Cli::try_parse_from(["hortops", "mix", "--rate", "no-separator"]);
    assert!(result.is_err());
}

#[test]
fn parses_granular_with_explicit_rate() {
    let cli = Cli::try_parse_from([
        "hortops",
        "granular",
        "--area",
        "5000",
        "--rate",
        "4",
        "--name",
        "Starter",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Granular {
            area: Some(a),
            product: None,
            rate: Some(r),
            name: Some(ref n),
            format: OutputFormat::Text,
        }) if a == 5000.0 && r == 4.0 && n == "Starter"
    ));
}

#[test]
fn parses_granular_with_product() {
    let cli = Cli::try_parse_from([
        "hortops",
        "granular",
        "--area",
        "2500",
        "--product",
        "milorganite-6-4-0",
        "--format",
        "html",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Granular {
            product: Some(ref p),
            rate: None,
            format: OutputFormat::Html,
            ..
        }) if p == "milorganite-6-4-0"
    ));
}

#[test]
fn granular_product_conflicts_with_rate() {
    let result = Cli::try_parse_from([
        "hortops",
        "granular",
        "--area",
        "1000",
        "--product",
        "starter-18-24-12",
        "--rate",
        "4",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_products_with_category() {
    let cli = Cli::try_parse_from(["hortops", "products", "--category", "fungicide"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            category: Some(ProductCategory::Fungicide)
        })
    ));
}

#[test]
fn rejects_unknown_category() {
    let result = Cli::try_parse_from(["hortops", "products", "--category", "pesticide"]);
    assert!(result.is_err());
}

#[test]
fn catalog_flag_is_global() {
    let cli = Cli::try_parse_from([
        "hortops",
        "products",
        "--catalog",
        "/tmp/products.yaml",
    ])
    .unwrap();
    assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/products.yaml")));
}
