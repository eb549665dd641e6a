mod common;

use common::{path_str, warnings_with_code, TestEnv};
use predicates::str::contains;

const PRODUCT_NO_PRICE: &str = r#"<script type="application/ld+json">
{
  "@context": "https://schema.org",
  "@type": "Product",
  "name": "Desk lamp",
  "image": "https://example.com/lamp.jpg",
  "offers": {"@type": "Offer", "priceCurrency": "EUR"}
}
</script>"#;

#[test]
fn types_lists_builtin_templates() {
    let env = TestEnv::new();
    let out = env.run_json(&["types"]);
    assert_eq!(out["ok"], true);
    let names: Vec<&str> = out["data"]
        .as_array()
        .expect("types array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert!(names.contains(&"Product"));
    assert!(names.contains(&"FAQPage"));
    assert!(names.contains(&"Organization"));

    env.cmd()
        .arg("types")
        .assert()
        .success()
        .stdout(contains("Product\tProduct: a product or service"));
}

#[test]
fn template_prints_script_wrapped_snippet() {
    let env = TestEnv::new();
    env.cmd()
        .args(["template", "Event"])
        .assert()
        .success()
        .stdout(contains("<script type=\"application/ld+json\">"))
        .stdout(contains("\"@type\": \"Event\""));

    env.cmd().args(["template", "Starship"]).assert().failure();
}

#[test]
fn rules_for_unknown_type_fall_back_to_defaults() {
    let env = TestEnv::new();
    let out = env.run_json(&["rules", "Starship"]);
    let rule = &out["data"][0];
    assert_eq!(rule["name"], "Starship");
    assert_eq!(rule["required"], serde_json::json!(["@context", "@type"]));
}

#[test]
fn merge_one_type_is_object_and_many_is_array() {
    let env = TestEnv::new();

    let one = env.run_json(&["merge", "Product"]);
    let doc: serde_json::Value =
        serde_json::from_str(one["data"]["json"].as_str().expect("json text")).expect("parse");
    assert!(doc.is_object());
    assert_eq!(one["data"]["merged"], 1);

    let many = env.run_json(&["merge", "Organization", "WebSite", "Missing"]);
    let doc: serde_json::Value =
        serde_json::from_str(many["data"]["json"].as_str().expect("json text")).expect("parse");
    assert_eq!(doc.as_array().map(Vec::len), Some(2));
    assert_eq!(many["data"]["skipped"][0]["name"], "Missing");
    assert!(many["data"]["embed"]
        .as_str()
        .expect("embed")
        .starts_with("<script type=\"application/ld+json\">\n["));
}

#[test]
fn merge_embed_flag_prints_script_tag() {
    let env = TestEnv::new();
    env.cmd()
        .args(["merge", "Person", "--embed"])
        .assert()
        .success()
        .stdout(contains("<script type=\"application/ld+json\">\n{"))
        .stdout(contains("</script>"));
}

#[test]
fn extract_reads_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .arg("extract")
        .write_stdin("<script>\n[1,2,3]\n</script>")
        .assert()
        .success()
        .stdout("[1,2,3]\n");

    env.cmd()
        .args(["extract", "-"])
        .write_stdin("nothing to see")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn extract_strategy_flag_changes_result() {
    let env = TestEnv::new();
    let input = "{\"a\": 1}\n</script>\n<p>}</p>";
    let scanner = env.run_json_stdin(&["extract"], input);
    assert_eq!(scanner["data"]["strategy"], "scanner");
    assert_eq!(scanner["data"]["payload"], "{\"a\": 1}");

    let heuristic = env.run_json_stdin(&["--strategy", "heuristic", "extract"], input);
    assert_eq!(heuristic["data"]["payload"], "{\"a\": 1}\n</script>\n<p>}");
}

#[test]
fn format_preserves_non_ascii_and_is_stable() {
    let env = TestEnv::new();
    let input = env.write(
        "cn.html",
        "<script type=\"application/ld+json\">{\"@context\":\"https://schema.org\",\"@type\":\"Organization\",\"name\":\"示例公司\",\"url\":\"https://example.cn\"}</script>",
    );
    let first = env.run_json(&["format", path_str(&input)]);
    assert_eq!(first["ok"], true);
    let json = first["data"]["json"].as_str().expect("json").to_string();
    assert!(json.contains("示例公司"));
    assert!(json.starts_with("{\n  \"@context\": \"https://schema.org\","));

    let second = env.run_json_stdin(&["format"], &json);
    assert_eq!(second["data"]["json"], json.as_str());
}

#[test]
fn format_malformed_input_echoes_raw() {
    let env = TestEnv::new();
    let raw = "<script>\n{\"name\": \"x\",}\n</script>";
    let out = env.run_json_stdin(&["format"], raw);
    assert_eq!(out["ok"], false);
    assert_eq!(out["data"]["status"], "invalid");
    assert_eq!(out["data"]["raw"], raw);
    assert!(!out["data"]["error"].as_str().expect("error").is_empty());
    assert_eq!(out["data"]["line"], 2);

    env.cmd()
        .arg("format")
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(contains("invalid JSON:"))
        .stdout(contains(raw));
}

#[test]
fn check_flags_missing_offer_price_until_added() {
    let env = TestEnv::new();
    let out = env.run_json_stdin(&["check"], PRODUCT_NO_PRICE);
    assert_eq!(out["ok"], false);
    let report = &out["data"]["report"];
    let price = warnings_with_code(report, "offer_price_missing");
    assert_eq!(price.len(), 1);
    assert!(price[0]["message"].as_str().expect("message").contains("price"));

    let fixed = PRODUCT_NO_PRICE.replace(
        "\"priceCurrency\": \"EUR\"",
        "\"priceCurrency\": \"EUR\", \"price\": \"29.00\"",
    );
    let out = env.run_json_stdin(&["check"], &fixed);
    assert_eq!(out["ok"], true);
    assert!(warnings_with_code(&out["data"]["report"], "offer_price_missing").is_empty());
}

#[test]
fn check_organization_missing_name() {
    let env = TestEnv::new();
    let out = env.run_json_stdin(
        &["check"],
        r#"{"@context": "https://schema.org", "@type": "Organization", "url": "https://example.com"}"#,
    );
    let missing = warnings_with_code(&out["data"]["report"], "required_missing");
    assert_eq!(missing.len(), 1);
    assert!(missing[0]["message"].as_str().expect("message").contains("name"));
}

#[test]
fn check_text_output_numbers_blocks() {
    let env = TestEnv::new();
    env.cmd()
        .arg("check")
        .write_stdin(
            r#"[{"@context": "c", "@type": "Person", "name": "a"}, {"@type": "FAQPage", "mainEntity": [{"name": "Q"}]}]"#,
        )
        .assert()
        .success()
        .stdout(contains("info  array with 2 item(s)"))
        .stdout(contains("  #1 ok    Person: all required fields present"))
        .stdout(contains("  #2 warn  FAQPage: missing required fields: @context"))
        .stdout(contains("mainEntity[0] (Q) has no acceptedAnswer"))
        .stdout(contains("needs_attention: 2 block(s)"));
}

#[test]
fn preview_escapes_html() {
    let env = TestEnv::new();
    let out = env.run_json_stdin(&["preview"], "{\"q\": \"<b>\"}");
    assert_eq!(out["data"]["valid"], true);
    let html = out["data"]["html"].as_str().expect("html");
    assert!(html.starts_with("<pre><code class=\"language-json\">"));
    assert!(html.contains("&lt;b&gt;"));
}

#[test]
fn missing_input_file_is_an_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "/definitely/not/here.json"])
        .assert()
        .failure();
}

#[test]
fn user_config_switches_strategy_and_templates() {
    let env = TestEnv::new();
    let templates = env.work.join("templates");
    std::fs::create_dir_all(&templates).expect("templates dir");
    std::fs::write(
        templates.join("Course.jsonld"),
        "<script type=\"application/ld+json\">\n{\"@context\": \"https://schema.org\", \"@type\": \"Course\", \"name\": \"Rust\"}\n</script>",
    )
    .expect("write template");
    env.write_user_config(&format!(
        "[extract]\nstrategy = \"heuristic\"\n\n[catalog]\ntemplates_dir = \"{}\"\n",
        path_str(&templates)
    ));

    let out = env.run_json_stdin(&["extract"], "{}");
    assert_eq!(out["data"]["strategy"], "heuristic");

    let merged = env.run_json(&["merge", "Course"]);
    assert_eq!(merged["data"]["merged"], 1);
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--config", "/definitely/not/here.toml", "types"])
        .assert()
        .failure();
}

#[test]
fn shell_session_round_trip() {
    let env = TestEnv::new();
    env.cmd()
        .arg("shell")
        .write_stdin("select Organization\nload\nfav add Product\nfavs\nhistory\ncheck\nquit\n")
        .assert()
        .success()
        .stdout(contains("selected Organization"))
        .stdout(contains("\"@type\": \"Organization\""))
        .stdout(contains("favorited Product"))
        .stdout(contains("1\tload Organization"))
        .stdout(contains("ok: 1 block(s), 0 warning(s), 0 error(s)"));
}
