use super::*;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_args(&["hotmess-coach"]);
    assert!(args.command.is_none());
    assert!(args.base_url.is_none());
    assert!(args.debug_log.is_none());
}

#[test]
fn global_flags_are_accepted_after_subcommand() {
    let args = parse_args(&[
        "hotmess-coach",
        "chat",
        "--base-url",
        "http://coach.test:8080",
        "--debug-log",
        "/tmp/coach.log",
    ]);
    assert!(matches!(args.command, Some(Commands::Chat)));
    assert_eq!(args.base_url.as_deref(), Some("http://coach.test:8080"));
    assert_eq!(
        args.debug_log.as_deref(),
        Some(std::path::Path::new("/tmp/coach.log"))
    );
}

#[test]
fn ask_parses_bucket_level_and_prompt() {
    let args = parse_args(&[
        "hotmess-coach",
        "ask",
        "--family",
        "30+",
        "--chaos",
        "Chaotic",
        "the",
        "gravy",
        "is",
        "lumpy",
    ]);
    match args.command {
        Some(Commands::Ask {
            family,
            chaos,
            prompt,
        }) => {
            assert_eq!(family, FamilyBucket::ThirtyPlus);
            assert_eq!(chaos, ChaosLevel::Chaotic);
            assert_eq!(prompt.join(" "), "the gravy is lumpy");
        }
        _ => panic!("expected ask"),
    }
}

#[test]
fn ask_uses_defaults_for_omitted_choices() {
    let args = parse_args(&["hotmess-coach", "ask", "help"]);
    match args.command {
        Some(Commands::Ask { family, chaos, .. }) => {
            assert_eq!(family, FamilyBucket::FiveToTen);
            assert_eq!(chaos, ChaosLevel::Medium);
        }
        _ => panic!("expected ask"),
    }
}

#[test]
fn ask_rejects_unknown_bucket_and_missing_prompt() {
    assert!(Args::try_parse_from(["hotmess-coach", "ask", "--family", "2-4", "hi"]).is_err());
    assert!(Args::try_parse_from(["hotmess-coach", "ask"]).is_err());
}

#[test]
fn set_without_key_is_allowed() {
    let args = parse_args(&["hotmess-coach", "set"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert!(key.is_none());
            assert!(value.is_empty());
        }
        _ => panic!("expected set"),
    }
}

#[test]
fn set_collects_value_words() {
    let args = parse_args(&["hotmess-coach", "set", "base-url", "http://localhost:4000"]);
    match args.command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key.as_deref(), Some("base-url"));
            assert_eq!(value, vec!["http://localhost:4000".to_string()]);
        }
        _ => panic!("expected set"),
    }
}

#[test]
fn unset_requires_key() {
    assert!(Args::try_parse_from(["hotmess-coach", "unset"]).is_err());
    let args = parse_args(&["hotmess-coach", "unset", "theme"]);
    assert!(matches!(args.command, Some(Commands::Unset { key }) if key == "theme"));
}

#[test]
fn long_version_carries_package_version() {
    assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_version_carries_git_describe_and_build_date() {
    let describe = env!("VERGEN_GIT_DESCRIBE");
    let build_date = env!("VERGEN_BUILD_DATE");
    assert!(!describe.is_empty());
    assert!(LONG_VERSION.contains(&format!("({describe}, built {build_date})")));
}
