//! HTML5 elements, attributes and value sets.

use crate::provider::{Provider, ProviderTable, Subset};

pub fn provider() -> Provider {
    Provider::from_table(Subset::Html5, &HTML5)
}

pub const HTML5: ProviderTable = ProviderTable {
    tags: TAGS,
    globals: GLOBAL_ATTRIBUTES,
    value_sets: VALUE_SETS,
};

#[rustfmt::skip]
const TAGS: &[(&str, &str, &[&str])] = &[
    // The root element
    ("html", "The root of an HTML document.", &["manifest", "version", "xmlns"]),
    // Document metadata
    ("head", "Collection of metadata for the document.", &["profile"]),
    ("title", "The document's title or name.", &[]),
    (
        "base",
        "The document base URL for resolving relative URLs.",
        &["href", "target:target"],
    ),
    (
        "link",
        "Links the document to external resources.",
        &[
            "href", "crossorigin:xo", "rel", "media", "hreflang", "type", "sizes", "as",
            "integrity", "referrerpolicy:rp",
        ],
    ),
    (
        "meta",
        "Metadata that cannot be expressed with the other metadata elements.",
        &["name", "http-equiv", "content", "charset", "scheme"],
    ),
    (
        "style",
        "Style information for the document.",
        &["media", "nonce", "type", "scoped:v"],
    ),
    // Sections
    (
        "body",
        "The content of the document.",
        &[
            "onafterprint:h", "onbeforeprint:h", "onbeforeunload:h", "onhashchange:h",
            "onlanguagechange:h", "onmessage:h", "onoffline:h", "ononline:h", "onpagehide:h",
            "onpageshow:h", "onpopstate:h", "onstorage:h", "onunload:h", "alink", "background",
            "bgcolor", "link", "text", "vlink",
        ],
    ),
    ("article", "A self-contained composition.", &[]),
    ("section", "A generic section of a document.", &[]),
    ("nav", "A section with navigation links.", &[]),
    ("aside", "Content tangentially related to its surroundings.", &[]),
    ("h1", "A level 1 heading.", &[]),
    ("h2", "A level 2 heading.", &[]),
    ("h3", "A level 3 heading.", &[]),
    ("h4", "A level 4 heading.", &[]),
    ("h5", "A level 5 heading.", &[]),
    ("h6", "A level 6 heading.", &[]),
    ("header", "Introductory or navigational content.", &[]),
    ("footer", "A footer for its nearest sectioning content.", &[]),
    ("address", "Contact information.", &[]),
    // Grouping content
    ("p", "A paragraph.", &[]),
    ("hr", "A thematic break between paragraphs.", &[]),
    ("pre", "Preformatted text.", &[]),
    ("blockquote", "A section quoted from another source.", &["cite"]),
    ("ol", "An ordered list of items.", &["reversed:v", "start", "type:lt"]),
    ("ul", "An unordered list of items.", &[]),
    ("li", "A list item.", &["value"]),
    ("dl", "A description list.", &[]),
    ("dt", "A term in a description list.", &[]),
    ("dd", "The description of a term in a description list.", &[]),
    ("figure", "Self-contained flow content, optionally with a caption.", &[]),
    ("figcaption", "A caption for its parent figure.", &[]),
    ("main", "The dominant content of the body.", &[]),
    ("div", "A generic flow container.", &[]),
    // Text-level semantics
    (
        "a",
        "A hyperlink.",
        &[
            "href", "target:target", "download", "ping", "rel", "hreflang", "type",
            "referrerpolicy:rp",
        ],
    ),
    ("em", "Stress emphasis.", &[]),
    ("strong", "Strong importance.", &[]),
    ("small", "Side comments such as fine print.", &[]),
    ("s", "Content that is no longer accurate.", &[]),
    ("cite", "The title of a work.", &[]),
    ("q", "Phrasing content quoted from another source.", &["cite"]),
    ("dfn", "The defining instance of a term.", &[]),
    ("abbr", "An abbreviation or acronym.", &[]),
    ("ruby", "Ruby annotations.", &[]),
    ("rb", "The base text of a ruby annotation.", &[]),
    ("rt", "The ruby text of a ruby annotation.", &[]),
    ("rp", "Parentheses around ruby text.", &[]),
    ("time", "A date or time.", &["datetime"]),
    ("code", "A fragment of computer code.", &[]),
    ("var", "A variable.", &[]),
    ("samp", "Sample output from a program.", &[]),
    ("kbd", "User input.", &[]),
    ("sub", "A subscript.", &[]),
    ("sup", "A superscript.", &[]),
    ("i", "Text in an alternate voice or mood.", &[]),
    ("b", "Text drawn to attention without extra importance.", &[]),
    ("u", "Text with an unarticulated annotation.", &[]),
    ("mark", "Highlighted text.", &[]),
    ("bdi", "Text isolated for bidirectional formatting.", &[]),
    ("bdo", "Explicit text directionality.", &["dir:d"]),
    ("span", "A generic phrasing container.", &[]),
    ("br", "A line break.", &[]),
    ("wbr", "A line break opportunity.", &[]),
    // Edits
    ("ins", "An addition to the document.", &["cite", "datetime"]),
    ("del", "A removal from the document.", &["cite", "datetime"]),
    // Embedded content
    ("picture", "A container for multiple image sources.", &[]),
    (
        "img",
        "An image.",
        &[
            "alt", "src", "srcset", "crossorigin:xo", "usemap", "ismap:v", "width", "height",
            "decoding:decoding", "loading:loading", "referrerpolicy:rp", "sizes",
        ],
    ),
    (
        "iframe",
        "A nested browsing context.",
        &[
            "src", "srcdoc", "name", "sandbox:sb", "seamless:v", "allowfullscreen:v", "width",
            "height", "allow", "loading:loading", "referrerpolicy:rp",
        ],
    ),
    (
        "embed",
        "An integration point for external content.",
        &["src", "type", "width", "height"],
    ),
    (
        "object",
        "An external resource.",
        &["data", "type", "typemustmatch:v", "name", "usemap", "form", "width", "height"],
    ),
    ("param", "A parameter for an object element.", &["name", "value"]),
    (
        "video",
        "A video player.",
        &[
            "src", "crossorigin:xo", "poster", "preload:pl", "autoplay:v", "mediagroup",
            "loop:v", "muted:v", "controls:v", "width", "height",
        ],
    ),
    (
        "audio",
        "A sound or audio stream.",
        &[
            "src", "crossorigin:xo", "preload:pl", "autoplay:v", "mediagroup", "loop:v",
            "muted:v", "controls:v",
        ],
    ),
    (
        "source",
        "An alternative media resource.",
        &["src", "type", "media", "srcset", "sizes"],
    ),
    (
        "track",
        "A timed text track for media elements.",
        &["default:v", "kind:tk", "label", "src", "srclang"],
    ),
    ("map", "An image map.", &["name"]),
    (
        "area",
        "A hyperlink region of an image map.",
        &[
            "alt", "coords", "shape:sh", "href", "target:target", "download", "ping", "rel",
            "hreflang", "type",
        ],
    ),
    // Tabular data
    ("table", "Tabular data.", &["sortable:v", "border"]),
    ("caption", "The title of a table.", &[]),
    ("colgroup", "A group of columns in a table.", &["span"]),
    ("col", "A column in a table.", &["span"]),
    ("tbody", "Rows forming the body of a table.", &[]),
    ("thead", "Rows forming the header of a table.", &[]),
    ("tfoot", "Rows forming the footer of a table.", &[]),
    ("tr", "A row of cells.", &[]),
    ("td", "A data cell.", &["colspan", "rowspan", "headers"]),
    (
        "th",
        "A header cell.",
        &["colspan", "rowspan", "headers", "scope:s", "sorted", "abbr"],
    ),
    // Forms
    (
        "form",
        "A form with controls for submitting data.",
        &[
            "accept-charset", "action", "autocomplete:o", "enctype:et", "method:m", "name",
            "novalidate:v", "target:target",
        ],
    ),
    ("label", "A caption for a form control.", &["form", "for"]),
    (
        "input",
        "A typed data field.",
        &[
            "accept", "alt", "autocomplete:inputautocomplete", "autofocus:v", "checked:v",
            "dirname", "disabled:v", "form", "formaction", "formenctype:et", "formmethod:fm",
            "formnovalidate:v", "formtarget", "height", "inputmode:im", "list", "max",
            "maxlength", "min", "minlength", "multiple:v", "name", "pattern", "placeholder",
            "readonly:v", "required:v", "size", "src", "step", "type:t", "value", "width",
            "tabindex",
        ],
    ),
    (
        "button",
        "A button.",
        &[
            "autofocus:v", "disabled:v", "form", "formaction", "formenctype:et",
            "formmethod:fm", "formnovalidate:v", "formtarget", "name", "type:bt", "value",
            "autocomplete",
        ],
    ),
    (
        "select",
        "A control for selecting among options.",
        &[
            "autocomplete:inputautocomplete", "autofocus:v", "disabled:v", "form",
            "multiple:v", "name", "required:v", "size",
        ],
    ),
    ("datalist", "Predefined options for other controls.", &[]),
    ("optgroup", "A group of options.", &["disabled:v", "label"]),
    (
        "option",
        "An option in a select or datalist.",
        &["disabled:v", "label", "selected:v", "value"],
    ),
    (
        "textarea",
        "A multiline plain-text edit control.",
        &[
            "autocomplete:inputautocomplete", "autofocus:v", "cols", "dirname", "disabled:v",
            "form", "inputmode:im", "maxlength", "minlength", "name", "placeholder",
            "readonly:v", "required:v", "rows", "wrap:w",
        ],
    ),
    ("output", "The result of a calculation.", &["for", "form", "name"]),
    ("progress", "Completion progress of a task.", &["value", "max"]),
    (
        "meter",
        "A scalar measurement within a known range.",
        &["value", "min", "max", "low", "high", "optimum"],
    ),
    ("fieldset", "A set of form controls.", &["disabled:v", "form", "name"]),
    ("legend", "A caption for a fieldset.", &[]),
    // Interactive elements
    ("details", "A disclosure widget.", &["open:v"]),
    ("summary", "A summary of a details element.", &[]),
    ("dialog", "A dialog box.", &["open:v"]),
    (
        "menu",
        "A list of commands.",
        &["type:mt", "label"],
    ),
    (
        "menuitem",
        "A command in a menu.",
        &[
            "type:mit", "label", "icon", "disabled:v", "checked:v", "radiogroup", "default:v",
            "command",
        ],
    ),
    // Scripting
    (
        "script",
        "An embedded or referenced script.",
        &[
            "src", "type", "charset", "async:v", "defer:v", "crossorigin:xo", "nonce",
            "integrity", "nomodule:v", "referrerpolicy:rp",
        ],
    ),
    ("noscript", "Content shown when scripting is disabled.", &[]),
    ("template", "Content fragments cloned by scripts.", &[]),
    ("canvas", "A bitmap drawing surface.", &["width", "height"]),
    ("slot", "A placeholder inside a web component.", &["name"]),
    ("data", "Content with a machine-readable value.", &["value"]),
    (
        "keygen",
        "A key pair generator control.",
        &["autofocus:v", "challenge", "disabled:v", "form", "keytype", "name"],
    ),
];

const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "autocapitalize",
    "class",
    "contenteditable:b",
    "contextmenu",
    "dir:d",
    "draggable:b",
    "dropzone",
    "hidden:v",
    "id",
    "inert:v",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope:v",
    "itemtype",
    "lang",
    "role:roles",
    "spellcheck:b",
    "style",
    "tabindex",
    "title",
    "translate:y",
    // Event handlers
    "onabort:h",
    "onblur:h",
    "oncanplay:h",
    "oncanplaythrough:h",
    "onchange:h",
    "onclick:h",
    "oncontextmenu:h",
    "ondblclick:h",
    "ondrag:h",
    "ondragend:h",
    "ondragenter:h",
    "ondragleave:h",
    "ondragover:h",
    "ondragstart:h",
    "ondrop:h",
    "ondurationchange:h",
    "onemptied:h",
    "onended:h",
    "onerror:h",
    "onfocus:h",
    "onformchange:h",
    "onforminput:h",
    "oninput:h",
    "oninvalid:h",
    "onkeydown:h",
    "onkeypress:h",
    "onkeyup:h",
    "onload:h",
    "onloadeddata:h",
    "onloadedmetadata:h",
    "onloadstart:h",
    "onmousedown:h",
    "onmousemove:h",
    "onmouseout:h",
    "onmouseover:h",
    "onmouseup:h",
    "onmousewheel:h",
    "onpause:h",
    "onplay:h",
    "onplaying:h",
    "onprogress:h",
    "onratechange:h",
    "onreset:h",
    "onresize:h",
    "onreadystatechange:h",
    "onscroll:h",
    "onseeked:h",
    "onseeking:h",
    "onselect:h",
    "onshow:h",
    "onstalled:h",
    "onsubmit:h",
    "onsuspend:h",
    "ontimeupdate:h",
    "onvolumechange:h",
    "onwaiting:h",
    // WAI-ARIA
    "aria-activedescendant",
    "aria-atomic:b",
    "aria-autocomplete:autocomplete",
    "aria-busy:b",
    "aria-checked:tristate",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-controls",
    "aria-current:current",
    "aria-describedby",
    "aria-details",
    "aria-disabled:b",
    "aria-dropeffect:dropeffect",
    "aria-errormessage",
    "aria-expanded:u",
    "aria-flowto",
    "aria-grabbed:u",
    "aria-haspopup:haspopup",
    "aria-hidden:b",
    "aria-invalid:invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live:live",
    "aria-modal:b",
    "aria-multiline:b",
    "aria-multiselectable:b",
    "aria-orientation:orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed:tristate",
    "aria-readonly:b",
    "aria-relevant:relevant",
    "aria-required:b",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-selected:u",
    "aria-setsize",
    "aria-sort:sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

#[rustfmt::skip]
const VALUE_SETS: &[(&str, &[&str])] = &[
    ("b", &["true", "false"]),
    ("u", &["true", "false", "undefined"]),
    ("o", &["on", "off"]),
    ("y", &["yes", "no"]),
    ("w", &["soft", "hard"]),
    ("d", &["ltr", "rtl", "auto"]),
    ("m", &["get", "post", "dialog"]),
    ("fm", &["get", "post"]),
    ("s", &["row", "col", "rowgroup", "colgroup"]),
    (
        "t",
        &[
            "hidden", "text", "search", "tel", "url", "email", "password", "datetime", "date",
            "month", "week", "time", "datetime-local", "number", "range", "color", "checkbox",
            "radio", "file", "submit", "image", "reset", "button",
        ],
    ),
    (
        "im",
        &[
            "verbatim", "latin", "latin-name", "latin-prose", "full-width-latin", "kana",
            "kana-name", "katakana", "numeric", "tel", "email", "url",
        ],
    ),
    ("bt", &["button", "submit", "reset", "menu"]),
    ("lt", &["1", "a", "A", "i", "I"]),
    ("mt", &["context", "toolbar"]),
    ("mit", &["command", "checkbox", "radio"]),
    (
        "et",
        &["application/x-www-form-urlencoded", "multipart/form-data", "text/plain"],
    ),
    ("tk", &["subtitles", "captions", "descriptions", "chapters", "metadata"]),
    ("pl", &["none", "metadata", "auto"]),
    ("sh", &["circle", "default", "poly", "rect"]),
    ("xo", &["anonymous", "use-credentials"]),
    ("target", &["_self", "_blank", "_parent", "_top"]),
    (
        "sb",
        &[
            "allow-forms", "allow-modals", "allow-pointer-lock", "allow-popups",
            "allow-popups-to-escape-sandbox", "allow-same-origin", "allow-scripts",
            "allow-top-navigation",
        ],
    ),
    (
        "rp",
        &[
            "no-referrer", "no-referrer-when-downgrade", "origin", "origin-when-cross-origin",
            "same-origin", "strict-origin", "strict-origin-when-cross-origin", "unsafe-url",
        ],
    ),
    ("decoding", &["sync", "async", "auto"]),
    ("loading", &["eager", "lazy"]),
    ("tristate", &["true", "false", "mixed", "undefined"]),
    (
        "inputautocomplete",
        &[
            "additional-name", "address-level1", "address-level2", "address-level3",
            "address-level4", "address-line1", "address-line2", "address-line3", "bday",
            "bday-year", "bday-day", "bday-month", "billing", "cc-additional-name", "cc-csc",
            "cc-exp", "cc-exp-month", "cc-exp-year", "cc-family-name", "cc-given-name",
            "cc-name", "cc-number", "cc-type", "country", "country-name", "current-password",
            "email", "family-name", "fax", "given-name", "home", "honorific-prefix",
            "honorific-suffix", "impp", "language", "mobile", "name", "new-password",
            "nickname", "off", "on", "organization", "organization-title", "pager",
            "photo", "postal-code", "sex", "shipping", "street-address", "tel",
            "tel-area-code", "tel-country-code", "tel-extension", "tel-local",
            "tel-local-prefix", "tel-local-suffix", "tel-national", "transaction-amount",
            "transaction-currency", "url", "username", "work",
        ],
    ),
    ("autocomplete", &["inline", "list", "both", "none"]),
    ("current", &["page", "step", "location", "date", "time", "true", "false"]),
    ("dropeffect", &["copy", "move", "link", "execute", "popup", "none"]),
    ("invalid", &["grammar", "false", "spelling", "true"]),
    ("live", &["off", "polite", "assertive"]),
    ("orientation", &["vertical", "horizontal", "undefined"]),
    ("relevant", &["additions", "removals", "text", "all", "additions text"]),
    ("sort", &["ascending", "descending", "none", "other"]),
    ("haspopup", &["false", "true", "menu", "listbox", "tree", "grid", "dialog"]),
    (
        "roles",
        &[
            "alert", "alertdialog", "button", "checkbox", "dialog", "gridcell", "link", "log",
            "marquee", "menuitem", "menuitemcheckbox", "menuitemradio", "option",
            "progressbar", "radio", "scrollbar", "searchbox", "slider", "spinbutton",
            "status", "switch", "tab", "tabpanel", "textbox", "timer", "tooltip", "treeitem",
            "combobox", "grid", "listbox", "menu", "menubar", "radiogroup", "tablist", "tree",
            "treegrid", "application", "article", "cell", "columnheader", "definition",
            "directory", "document", "feed", "figure", "group", "heading", "img", "list",
            "listitem", "math", "none", "note", "presentation", "region", "row", "rowgroup",
            "rowheader", "separator", "table", "term", "toolbar", "banner", "complementary",
            "contentinfo", "form", "main", "navigation", "search",
        ],
    ),
];
