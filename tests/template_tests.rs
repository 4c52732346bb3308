use propfile::{from_str, Error};

#[test]
fn test_template_expands_to_its_lines() {
    let input = "\
<defaults>
log.level = info
log.rotate = true
</defaults>
%defaults%
";
    let props = from_str(input).unwrap();
    assert_eq!(props.get("log.level"), "info");
    assert_eq!(props.get("log.rotate"), "true");
    // Definition lines disappear from the model.
    assert_eq!(props.to_string(), "log.level = info\nlog.rotate = true\n");
}

#[test]
fn test_template_reference_inside_block_is_qualified() {
    let input = "\
<logging>
log.level = info
</logging>
server
{
%logging%
}
client
{
%logging%
}
";
    let props = from_str(input).unwrap();
    assert_eq!(props.get("server.log.level"), "info");
    assert_eq!(props.get("client.log.level"), "info");
}

#[test]
fn test_template_can_be_referenced_repeatedly() {
    let input = "\
<a>
x = 1
</a>
%a%
%a%
";
    let props = from_str(input).unwrap();
    assert_eq!(props.get("x"), "1");
    assert_eq!(props.to_string(), "x = 1\nx = 1\n");
}

#[test]
fn test_template_expansion_is_not_recursive() {
    // A reference stored inside a definition body is replayed verbatim, not
    // expanded again; the main parser then reads it as a bare key.
    let input = "\
<a>
x = 1
</a>
<b>
%a%
</b>
%b%
";
    let props = from_str(input).unwrap();
    assert!(props.has_key("%a%"));
    assert!(!props.has_key("x"));
}

#[test]
fn test_undefined_template_is_an_error() {
    let err = from_str("known = 1\n%ghost%\n").unwrap_err();
    assert_eq!(
        err,
        Error::UndefinedTemplate {
            name: "ghost".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_reference_before_definition_is_an_error() {
    let input = "%t%\n<t>\nx = 1\n</t>\n";
    assert!(matches!(
        from_str(input),
        Err(Error::UndefinedTemplate { .. })
    ));
}

#[test]
fn test_unterminated_template_is_an_error() {
    let err = from_str("<t>\nbody = 1\n").unwrap_err();
    assert_eq!(
        err,
        Error::TemplateUnterminated {
            name: "t".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_empty_template_name_is_an_error() {
    assert!(matches!(
        from_str("<>\n</>\n"),
        Err(Error::TemplateSyntax { line: 1, .. })
    ));
}

#[test]
fn test_error_messages_carry_line_numbers() {
    let err = from_str("a = 1\nb = 2\n%missing%\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing"));
    assert!(msg.contains("line 3"));
}

#[test]
fn test_failed_parse_yields_no_model() {
    // A preprocessing failure rejects the whole input; no partial model.
    assert!(from_str("good = 1\n%bad%\n").is_err());
}
