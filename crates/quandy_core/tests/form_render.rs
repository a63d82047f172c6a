use quandy_core::{ChoiceOption, FieldConfig, FormConfig, FormMethod, render_field, render_form};

#[test]
fn only_the_matching_option_is_selected() {
    let config = FieldConfig::choice_list(
        "fruit",
        [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")],
    )
    .with_value("b");
    let html = render_field(&config);
    assert_eq!(html.matches(" selected").count(), 1);
    assert!(html.contains("        <option value=\"b\" selected>Banana</option>"));
    assert!(html.contains("        <option value=\"a\">Apple</option>"));
}

#[test]
fn bare_and_pair_options_render_identically() {
    let bare = FieldConfig::choice_list("size", ["S", "M"]);
    let pairs = FieldConfig::choice_list("size", [("S", "S"), ("M", "M")]);
    assert_eq!(render_field(&bare), render_field(&pairs));
}

#[test]
fn choice_list_layout() {
    let mut config = FieldConfig::choice_list("color", [ChoiceOption::new("r", "Red")]);
    config.leading_blank_option = true;
    config.multiple = true;
    config.css_class = "wide".to_string();
    let html = render_field(&config);
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  <tr id=\"color_tablerow\" class=\"wide_tablerow\">",
            "    <th title=\"Color\">Color</th>",
            "    <td title=\"Color\">",
            "      <select id=\"color\" name=\"color\" class=\"wide\" multiple=\"multiple\">",
            "        <option value=\"\">--</option>",
            "        <option value=\"r\">Red</option>",
            "      </select>",
            "    </td>",
            "  </tr>",
        ]
    );
}

#[test]
fn hidden_input_gets_hidden_row() {
    let html = render_field(&FieldConfig::input("token", "hidden").with_value("abc"));
    assert_eq!(
        html,
        "  <tr style=\"display: none\"><td><input id=\"token\" name=\"token\" value=\"abc\" type=\"hidden\"></td></tr>"
    );
}

#[test]
fn visible_hidden_input_shows_value() {
    let mut config = FieldConfig::input("user_id", "hidden").with_value("42");
    config.visible = true;
    let html = render_field(&config);
    assert!(html.contains("<th title=\"User Id\">User Id</th>"));
    assert!(html.contains("      42"));
}

#[test]
fn submit_spans_both_columns() {
    let mut config = FieldConfig::input("send", "submit").with_value("Send");
    config.title = "Send it".to_string();
    let html = render_field(&config);
    assert!(html.contains("    <td colspan=\"2\" title=\"Send it\" class=\"form_button\">"));
    assert!(!html.contains("<th"));
}

#[test]
fn text_area_two_line_layout() {
    let mut config = FieldConfig::text_area("notes").with_value("a < b");
    config.two_line_layout = true;
    config.rows = 4;
    config.cols = 0;
    let html = render_field(&config);
    assert_eq!(
        html.lines().collect::<Vec<_>>(),
        vec![
            "  <tr id=\"notes_tablerow\">",
            "    <th colspan=\"2\" title=\"Notes\">Notes</th>",
            "  </tr>",
            "  <tr>",
            "    <td colspan=\"2\" title=\"Notes\" class=\"form_textarea\">",
            "      <textarea id=\"notes\" name=\"notes\" rows=\"4\">a &lt; b</textarea>",
            "    </td>",
            "  </tr>",
        ]
    );
}

#[test]
fn disabled_and_empty_attributes() {
    let mut config = FieldConfig::input("email", "text");
    config.disabled = true;
    let html = render_field(&config);
    assert!(html.contains("<input id=\"email\" name=\"email\" disabled=\"disabled\" type=\"text\">"));
    assert!(!html.contains("class="));
    assert!(!html.contains("value="));
}

#[test]
fn form_wraps_fields_in_order() {
    let form = FormConfig {
        id: "signup".to_string(),
        method: FormMethod::Get,
        fields: vec![
            render_field(&FieldConfig::input("first", "text")),
            render_field(&FieldConfig::input("go", "submit")),
        ],
        ..FormConfig::default()
    };
    let html = render_form(&form);
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(
        lines[0],
        "<form id=\"signup\" name=\"signup\" method=\"get\" enctype=\"application/x-www-form-urlencoded\">"
    );
    assert_eq!(lines[1], "<table>");
    assert_eq!(lines[2], "<tbody id=\"signup_tbody\">");
    assert!(html.find("first_tablerow").expect("first") < html.find("go_tablerow").expect("go"));
    assert!(html.ends_with("</tbody>\n</table>\n</form>"));
}

#[test]
fn form_without_id_generates_one() {
    let html = render_form(&FormConfig::default());
    assert!(html.starts_with("<form id=\"id_"));
    assert!(html.contains("method=\"post\""));
    assert!(!html.contains("action="));
}
