use super::*;

fn env_with(
    no_color: Option<&str>,
    force_color: Option<&str>,
    clicolor: Option<&str>,
    ci: Option<&str>,
) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: ci.map(String::from),
    }
}

#[test]
fn test_empty_environment_keeps_intent() {
    let env = EnvironmentConfig::default();
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let env = env_with(Some("1"), None, None, None);
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);

    // Empty NO_COLOR is ignored
    let env = env_with(Some(""), None, None, None);
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env = env_with(Some("1"), Some("1"), Some("0"), None);
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Always);

    let env = env_with(None, Some("false"), None, None);
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_ci_disables_everything() {
    let env = env_with(None, Some("1"), None, Some("true"));
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_invalid_force_color_is_ignored() {
    let env = env_with(None, Some("maybe"), None, None);
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}
