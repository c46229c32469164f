//! The CPS editor profile: default toolbar sets, font lists and dialog paths.

use super::ToolbarRow;
use std::collections::BTreeMap;

pub const FONT_COLORS: &str = "000000,993300,333300,003300,003366,000080,333399,333333,\
800000,FF6600,808000,808080,008080,0000FF,666699,808080,FF0000,FF9900,99CC00,339966,\
33CCCC,3366FF,800080,999999,FF00FF,FFCC00,FFFF00,00FF00,00FFFF,00CCFF,993366,C0C0C0,\
FF99CC,FFCC99,FFFF99,CCFFCC,CCFFFF,99CCFF,CC99FF,FFFFFF";

pub const FONT_NAMES: &str = "Arial, Geneva, Helvetica, Helv, sans-serif;\
Verdana, Arial, Helvetica, sans-serif;\
Tahoma, Arial, Helvetica, sans-serif;\
Trebuchet MS, Arial, Helvetica, sans-serif;\
Comic Sans MS, Arial, Helvetica, sans-serif;\
Garamond, Times New Roman, Times, Serif;\
Times New Roman, Times, Roman, Serif;\
Courier New, Courier;\
Letter Gothic, LetterGothic, Courier New, Courier;\
Lucida Console, Courier New, Courier";

pub const FONT_SIZES: &str = "1/xx-small;2/x-small;3/small;4/medium;5/large;6/x-large;7/xx-large";

pub const FONT_FORMATS: &str = "p;div;pre;address;h1;h2;h3;h4;h5;h6";

/// Server-side script extensions never accepted as link uploads.
pub const LINK_DENIED_EXTENSIONS: &str =
    ".(php|php3|php5|phtml|asp|aspx|ascx|jsp|cfm|cfc|pl|bat|exe|dll|reg|cgi)$";

pub const IMAGE_ALLOWED_EXTENSIONS: &str = ".(jpg|gif|jpeg|png)$";

pub const FLASH_ALLOWED_EXTENSIONS: &str = ".(swf|fla)$";

/// Tree browser shared by the link and flash dialogs.
pub const FILES_BROWSER_URL: &str = "fck_browse_files.html";

pub const IMAGES_BROWSER_URL: &str = "fck_browse_images.html";

/// Fraction of the screen used by browse dialogs.
pub const BROWSER_WINDOW_RATIO: f64 = 0.7;

pub const CONTEXT_MENU: [&str; 18] = [
    "Generic",
    "Link",
    "Anchor",
    "Image",
    "Flash",
    "Select",
    "Textarea",
    "Checkbox",
    "Radio",
    "TextField",
    "HiddenField",
    "ImageButton",
    "Button",
    "BulletedList",
    "NumberedList",
    "TableCell",
    "Table",
    "Form",
];

pub const SMILEY_IMAGES: [&str; 21] = [
    "regular_smile.gif",
    "sad_smile.gif",
    "wink_smile.gif",
    "teeth_smile.gif",
    "confused_smile.gif",
    "tounge_smile.gif",
    "embaressed_smile.gif",
    "omg_smile.gif",
    "whatchutalkingabout_smile.gif",
    "angry_smile.gif",
    "angel_smile.gif",
    "shades_smile.gif",
    "devil_smile.gif",
    "cry_smile.gif",
    "lightbulb.gif",
    "thumbs_down.gif",
    "thumbs_up.gif",
    "heart.gif",
    "broken_heart.gif",
    "kiss.gif",
    "envelope.gif",
];

fn group(commands: &[&str]) -> ToolbarRow {
    ToolbarRow::Group(commands.iter().map(|c| c.to_string()).collect())
}

/// Toolbar sets of the CPS profile, keyed by set name.
///
/// `ZopeCmf` is the full toolbar for document bodies, `SmallZopeCmf` the
/// compact one for short rich fields, `Semantic` relies on the `semantic`
/// plugin.
pub fn toolbar_sets() -> BTreeMap<String, Vec<ToolbarRow>> {
    let mut sets = BTreeMap::new();

    sets.insert(
        "Default".to_string(),
        vec![
            group(&["Source", "DocProps", "-", "Save", "NewPage", "Preview", "-", "Templates"]),
            group(&["Cut", "Copy", "Paste", "PasteText", "PasteWord", "-", "Print", "SpellCheck"]),
            group(&["Undo", "Redo", "-", "Find", "Replace", "-", "SelectAll", "RemoveFormat"]),
            group(&["Bold", "Italic", "Underline", "StrikeThrough", "-", "Subscript", "Superscript"]),
            group(&["OrderedList", "UnorderedList", "-", "Outdent", "Indent"]),
            group(&["JustifyLeft", "JustifyCenter", "JustifyRight", "JustifyFull"]),
            group(&["Link", "Unlink", "Anchor"]),
            group(&[
                "Image", "Flash", "Table", "Rule", "Smiley", "SpecialChar", "PageBreak",
                "UniversalKey",
            ]),
            group(&[
                "Form", "Checkbox", "Radio", "TextField", "Textarea", "Select", "Button",
                "ImageButton", "HiddenField",
            ]),
            ToolbarRow::LineBreak,
            group(&["Style", "FontFormat", "FontName", "FontSize"]),
            group(&["TextColor", "BGColor"]),
            group(&["About"]),
        ],
    );

    sets.insert(
        "ZopeCmf".to_string(),
        vec![
            group(&["Source", "DocProps", "-", "Preview", "-", "Templates"]),
            group(&["Cut", "Copy", "Paste", "PasteText", "PasteWord", "-", "Print", "SpellCheck"]),
            group(&["Undo", "Redo", "-", "Find", "Replace", "-", "SelectAll", "RemoveFormat"]),
            group(&["Bold", "Italic", "Underline", "StrikeThrough", "-", "Subscript", "Superscript"]),
            group(&["OrderedList", "UnorderedList", "-", "Outdent", "Indent"]),
            group(&["JustifyLeft", "JustifyCenter", "JustifyRight", "JustifyFull"]),
            group(&["Link", "Unlink", "Anchor"]),
            group(&[
                "Image", "Flash", "Table", "Rule", "SpecialChar", "PageBreak", "Smiley",
                "UniversalKey",
            ]),
            group(&[
                "Form", "Checkbox", "Radio", "TextField", "Textarea", "Select", "Button",
                "ImageButton", "HiddenField",
            ]),
            ToolbarRow::LineBreak,
            group(&["Style", "FontFormat", "FontName", "FontSize"]),
            group(&["TextColor", "BGColor"]),
            group(&["About"]),
        ],
    );

    sets.insert(
        "SmallZopeCmf".to_string(),
        vec![
            group(&["Source", "-", "Preview"]),
            group(&["Cut", "Copy", "Paste", "PasteText", "PasteWord"]),
            group(&["Undo", "Redo", "SelectAll", "RemoveFormat"]),
            group(&["Bold", "Italic", "Underline", "StrikeThrough", "-", "Subscript", "Superscript"]),
            group(&["OrderedList", "UnorderedList", "-", "Outdent", "Indent"]),
            group(&["JustifyLeft", "JustifyCenter", "JustifyRight", "JustifyFull"]),
            group(&["Link", "Unlink"]),
            group(&["Image", "Flash", "Table", "Rule", "SpecialChar", "Smiley", "UniversalKey"]),
            group(&["Style", "FontFormat", "FontName", "FontSize"]),
            group(&["TextColor", "BGColor"]),
            group(&["About"]),
        ],
    );

    sets.insert(
        "Semantic".to_string(),
        vec![
            group(&["Italic", "Bold", "Lang", "Abbr", "Acronym", "Cite", "Q", "Style"]),
            group(&["-", "OrderedList", "UnorderedList", "-", "Link", "Unlink"]),
            ToolbarRow::LineBreak,
            group(&["RemoveFormat", "Undo", "Redo", "Source"]),
        ],
    );

    sets.insert(
        "Basic".to_string(),
        vec![group(&[
            "Bold", "Italic", "-", "OrderedList", "UnorderedList", "-", "Link", "Unlink", "-",
            "About",
        ])],
    );

    sets
}
