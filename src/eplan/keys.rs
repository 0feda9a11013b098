//! Raw EPLAN property key codes and their human-readable labels.
//!
//! EPLAN exports key every field by opaque positional codes. Object-level
//! codes look like `O4`, property codes like `@P10009`, attribute codes
//! like `@A133`, and structured field codes like `S75x5`. The table built
//! by [`key_map`] translates the codes a project model cares about into
//! the labels the typed accessors read.

use crate::ops::RenameTable;

// -------------- Roots and defaults -----------------
pub const PROJECT_ROOT: &str = "EplanPxfRoot";
pub const UNKNOWN_ATTRIBUTE: &str = "Unknown";

// -------------- Object keys -----------------
pub const PROPERTY: &str = "P11";
pub const PROJECT_INDEX_NUMBER: &str = "P49";
pub const SHEET_OBJECTS: &str = "O3";
pub const PROJECT_SHEET: &str = "O4";
pub const PROJECT_GROUP: &str = "O6";
pub const PROJECT_DATA: &str = "O14";
pub const SHEET_TAGS: &str = "O17";
pub const SHEET_TEXT_OBJECTS: &str = "O30";
pub const SHEET_META_DATA: &str = "O52";
pub const GRAPHIC_DATA: &str = "O76";
pub const PROJECT_BOM: &str = "O117";
pub const USER_SUPPL_DATA: &str = "O211";
pub const USER_SUPPL_FIELD: &str = "S212x5";
pub const FORM_PROPERTY: &str = "S75x5";

// -------------- Attribute keys -----------------
pub const LAST_EDIT_TIME_EPOCH: &str = "@A48";
pub const GROUP_NAME: &str = "@A82";
pub const PROJECT_TITLE: &str = "@A133";
pub const OBJECT_DETAIL: &str = "@A511";
pub const PAGE_NUMBER_MAJOR: &str = "@A1101";
pub const PAGE_NUMBER_MINOR: &str = "@A1102";
pub const FORM_LAST_EDITED_BY: &str = "@A1408";
pub const FORM_DESCRIPTION: &str = "@A1410";
pub const FORM_TEMPLATE_NAME: &str = "@A1413";
pub const FORM_NAME: &str = "@A2196";

// -------------- Property keys -----------------
pub const GROUP_META: &str = "@P1002";
pub const DEVICE_IP_ADDRESS: &str = "@P1009";
pub const MAJOR_DEVICE: &str = "@P1100";
pub const MINOR_DEVICE: &str = "@P1200";
pub const FUNCTIONAL_ASSIGNMENT: &str = "@P10001";
pub const HIGHER_LEVEL_FUNCTION: &str = "@P10002";
pub const INSTALLATION_SITE: &str = "@P10003";
pub const MOUNTING_LOCATION: &str = "@P10004";
pub const PROJECT_NAME_FULL: &str = "@P10009";
pub const PROJECT_PATH: &str = "@P10010";
pub const PROJECT_DESCRIPTION: &str = "@P10011";
pub const USE_PAGE_NAME_IN_DT: &str = "@P10012";
pub const JOB_NUMBER: &str = "@P10013";
pub const COMPANY_NAME: &str = "@P10015";
pub const COMPANY_ADDRESS_LINE1: &str = "@P10016";
pub const COMPANY_ADDRESS_LINE2: &str = "@P10017";
pub const CREATOR: &str = "@P10020";
pub const CREATION_DATE_EPOCH: &str = "@P10021";
pub const PLACE_OF_INSTALL: &str = "@P10032";
pub const LOCATION: &str = "@P10035";
pub const PROJECT_PATH_FULL: &str = "@P10045";
pub const PROJECT_TEMPLATE: &str = "@P10069";
pub const APPROVED_BY: &str = "@P10160";
pub const CUSTOMER_CODE: &str = "@P10180";
pub const UNIQUE_PROJECT_ID: &str = "@P10184";
pub const NAME: &str = "@P11011";
pub const INDEX_MAJOR: &str = "@P11012";
pub const INDEX_MINOR: &str = "@P11013";
pub const TEMPLATE_FORM_NAME: &str = "@P11015";
pub const TITLE_BLOCK: &str = "@P11016";
pub const CREATED_BY: &str = "@P11020";
pub const CREATED_ON_EPOCH: &str = "@P11021";
pub const EDITED_BY: &str = "@P11022";
pub const EDITED_ON_EPOCH: &str = "@P11023";
pub const SUPPLY_FIELD_SHEET_NO: &str = "@P11033";
pub const PROJECT_NAME: &str = "@P11056";
pub const SPECIAL_REMARKS: &str = "@P11059";
pub const SOURCE: &str = "@P11066";
pub const SOURCE_PROJECT: &str = "@P11067";
pub const BOM_QUANTITY: &str = "@P2200";
pub const BOM_ITEM_DUP: &str = "@P22001";
pub const BOM_SPEC_NO: &str = "@P22002";
pub const BOM_PART_NO: &str = "@P22003";
pub const BOM_PART_DESC: &str = "@P22004";
pub const BOM_CABLE_CONDUIT_COUNT: &str = "@P22005";
pub const BOM_CABLE_SIZE_LENGTH: &str = "@P22006";
pub const BOM_MANUFACTURER: &str = "@P22007";
pub const BOM_ADDED_BY: &str = "@P22980";
pub const BOM_ADDED_ON_EPOCH: &str = "@P22981";
pub const BOM_EDITED_BY: &str = "@P22982";
pub const BOM_EDITED_ON_EPOCH: &str = "@P22983";

// -------------- Labels -----------------
// Shared by the rename table and the typed project accessors.
pub const LABEL_PROPERTIES: &str = "Properties";
pub const LABEL_INDEXES: &str = "Indexes";
pub const LABEL_SHEET_OBJECTS: &str = "Sheet Objects";
pub const LABEL_SHEETS: &str = "Sheets";
pub const LABEL_PROJECT_GROUPS: &str = "Project Groups";
pub const LABEL_PROJECT_DATA: &str = "Project Data";
pub const LABEL_SHEET_TAGS: &str = "Sheet Tags";
pub const LABEL_SHEET_TEXT_OBJECTS: &str = "Sheet Text Objects";
pub const LABEL_SHEET_META_DATA: &str = "Sheet Meta Data";
pub const LABEL_GRAPHIC_META_DATA: &str = "Graphic Meta Data";
pub const LABEL_PROJECT_BOM: &str = "Project BOM";
pub const LABEL_PROJECT_NAME: &str = "Project Name";
pub const LABEL_PROJECT_NAME_FULL: &str = "Project Name Full";
pub const LABEL_PROJECT_DESCRIPTION: &str = "Project Description";
pub const LABEL_PROJECT_TITLE: &str = "Project Title";
pub const LABEL_JOB_NUMBER: &str = "Job Number";
pub const LABEL_COMPANY_NAME: &str = "Company Name";
pub const LABEL_PROJECT_NUMBER: &str = "Project Number";
pub const LABEL_UNIQUE_PROJECT_ID: &str = "Unique Project ID";
pub const LABEL_IP_ADDRESS: &str = "IP Address";

/// Code to label pairs backing [`key_map`].
const KEY_MAP_ENTRIES: &[(&str, &str)] = &[
    (APPROVED_BY, "Approved By"),
    (BOM_ADDED_BY, "BOM Added By"),
    (BOM_ADDED_ON_EPOCH, "BOM Added On (Epoch)"),
    (BOM_CABLE_CONDUIT_COUNT, "Cable/Conduit Count"),
    (BOM_CABLE_SIZE_LENGTH, "Cable Size/Length"),
    (BOM_EDITED_BY, "BOM Edited By"),
    (BOM_EDITED_ON_EPOCH, "BOM Edited On (Epoch)"),
    (BOM_ITEM_DUP, "BOM Item Dup"),
    (BOM_MANUFACTURER, "Manufacturer"),
    (BOM_PART_NO, "Part Number"),
    (BOM_PART_DESC, "Part Description"),
    (BOM_QUANTITY, "Quantity"),
    (BOM_SPEC_NO, "BOM Spec No."),
    (CREATED_BY, "Created By"),
    (CREATED_ON_EPOCH, "Created On (Epoch)"),
    (CREATION_DATE_EPOCH, "Created On (Epoch)"),
    (CREATOR, "Created By"),
    (COMPANY_ADDRESS_LINE1, "Address Line 1"),
    (COMPANY_ADDRESS_LINE2, "Address Line 2"),
    (COMPANY_NAME, LABEL_COMPANY_NAME),
    (CUSTOMER_CODE, LABEL_PROJECT_NUMBER),
    (DEVICE_IP_ADDRESS, LABEL_IP_ADDRESS),
    (EDITED_BY, "Edited By"),
    (EDITED_ON_EPOCH, "Edited On (Epoch)"),
    (FORM_DESCRIPTION, "Description"),
    (FORM_LAST_EDITED_BY, "Last Edited By"),
    (FORM_NAME, "Form Name"),
    (FORM_PROPERTY, "Form Properties"),
    (FORM_TEMPLATE_NAME, "Form Template Name"),
    (FUNCTIONAL_ASSIGNMENT, "Functional Assignment"),
    (GRAPHIC_DATA, LABEL_GRAPHIC_META_DATA),
    (GROUP_NAME, "Group Name"),
    (GROUP_META, "Group Meta Data"),
    (HIGHER_LEVEL_FUNCTION, "Higher Level Function"),
    (INDEX_MAJOR, "Major Index"),
    (INDEX_MINOR, "Minor Index"),
    (INSTALLATION_SITE, "Installation Site"),
    (JOB_NUMBER, LABEL_JOB_NUMBER),
    (LAST_EDIT_TIME_EPOCH, "Last Edit Time (Epoch)"),
    (LOCATION, "Location"),
    (MAJOR_DEVICE, "Device Major Relation"),
    (MINOR_DEVICE, "Device Minor Relation"),
    (MOUNTING_LOCATION, "Mounting Location"),
    (NAME, "Name"),
    (OBJECT_DETAIL, "Object Detail"),
    (PAGE_NUMBER_MAJOR, "Page Number Major"),
    (PAGE_NUMBER_MINOR, "Page Number Minor"),
    (PLACE_OF_INSTALL, "Place Of Installation"),
    (PROJECT_BOM, LABEL_PROJECT_BOM),
    (PROJECT_DATA, LABEL_PROJECT_DATA),
    (PROJECT_DESCRIPTION, LABEL_PROJECT_DESCRIPTION),
    (PROJECT_GROUP, LABEL_PROJECT_GROUPS),
    (PROJECT_INDEX_NUMBER, LABEL_INDEXES),
    (PROJECT_NAME, LABEL_PROJECT_NAME),
    (PROJECT_NAME_FULL, LABEL_PROJECT_NAME_FULL),
    (PROJECT_PATH, "Project Path"),
    (PROJECT_PATH_FULL, "Project Path Full"),
    (PROJECT_SHEET, LABEL_SHEETS),
    (PROJECT_TEMPLATE, "Project Template"),
    (PROJECT_TITLE, LABEL_PROJECT_TITLE),
    (PROPERTY, LABEL_PROPERTIES),
    (SHEET_META_DATA, LABEL_SHEET_META_DATA),
    (SHEET_OBJECTS, LABEL_SHEET_OBJECTS),
    (SHEET_TAGS, LABEL_SHEET_TAGS),
    (SHEET_TEXT_OBJECTS, LABEL_SHEET_TEXT_OBJECTS),
    (SOURCE, "Source"),
    (SOURCE_PROJECT, "Report: Source Project"),
    (SPECIAL_REMARKS, "Special Remarks"),
    (SUPPLY_FIELD_SHEET_NO, "Supply Field Sheet No."),
    (TEMPLATE_FORM_NAME, "Template Form Name"),
    (TITLE_BLOCK, "Title Block"),
    (UNIQUE_PROJECT_ID, LABEL_UNIQUE_PROJECT_ID),
    (USE_PAGE_NAME_IN_DT, "Use Page Name In DT"),
    (USER_SUPPL_DATA, "User Supplemental Data"),
    (USER_SUPPL_FIELD, "User Supplemental Field"),
];

/// Builds the rename table translating raw EPLAN key codes into
/// human-readable labels.
pub fn key_map() -> RenameTable {
    KEY_MAP_ENTRIES.iter().copied().collect()
}
