//! Builtin catalog columns and their wire codes.

use super::CatalogField;

// Zones
pub const ZONE_ID: CatalogField = CatalogField::builtin("ZONE_ID", 101);
pub const ZONE_NAME: CatalogField = CatalogField::builtin("ZONE_NAME", 102);
pub const ZONE_TYPE: CatalogField = CatalogField::builtin("ZONE_TYPE", 103);
pub const ZONE_CONNECTION: CatalogField = CatalogField::builtin("ZONE_CONNECTION", 104);
pub const ZONE_COMMENT: CatalogField = CatalogField::builtin("ZONE_COMMENT", 105);

// Users
pub const USER_ID: CatalogField = CatalogField::builtin("USER_ID", 201);
pub const USER_NAME: CatalogField = CatalogField::builtin("USER_NAME", 202);
pub const USER_TYPE: CatalogField = CatalogField::builtin("USER_TYPE", 203);
pub const USER_ZONE: CatalogField = CatalogField::builtin("USER_ZONE", 204);
pub const USER_INFO: CatalogField = CatalogField::builtin("USER_INFO", 206);
pub const USER_COMMENT: CatalogField = CatalogField::builtin("USER_COMMENT", 207);
pub const USER_CREATE_TIME: CatalogField = CatalogField::builtin("USER_CREATE_TIME", 208);
pub const USER_MODIFY_TIME: CatalogField = CatalogField::builtin("USER_MODIFY_TIME", 209);

// Resources
pub const RESC_ID: CatalogField = CatalogField::builtin("RESC_ID", 301);
pub const RESC_NAME: CatalogField = CatalogField::builtin("RESC_NAME", 302);
pub const RESC_ZONE_NAME: CatalogField = CatalogField::builtin("RESC_ZONE_NAME", 303);
pub const RESC_TYPE_NAME: CatalogField = CatalogField::builtin("RESC_TYPE_NAME", 304);
pub const RESC_CLASS_NAME: CatalogField = CatalogField::builtin("RESC_CLASS_NAME", 305);
pub const RESC_LOC: CatalogField = CatalogField::builtin("RESC_LOC", 306);
pub const RESC_VAULT_PATH: CatalogField = CatalogField::builtin("RESC_VAULT_PATH", 307);
pub const RESC_FREE_SPACE: CatalogField = CatalogField::builtin("RESC_FREE_SPACE", 308);
pub const RESC_INFO: CatalogField = CatalogField::builtin("RESC_INFO", 309);
pub const RESC_COMMENT: CatalogField = CatalogField::builtin("RESC_COMMENT", 310);
pub const RESC_CREATE_TIME: CatalogField = CatalogField::builtin("RESC_CREATE_TIME", 311);
pub const RESC_MODIFY_TIME: CatalogField = CatalogField::builtin("RESC_MODIFY_TIME", 312);
pub const RESC_STATUS: CatalogField = CatalogField::builtin("RESC_STATUS", 313);
pub const RESC_FREE_SPACE_TIME: CatalogField = CatalogField::builtin("RESC_FREE_SPACE_TIME", 314);

// Data objects
pub const DATA_ID: CatalogField = CatalogField::builtin("DATA_ID", 401);
pub const DATA_COLL_ID: CatalogField = CatalogField::builtin("DATA_COLL_ID", 402);
pub const DATA_NAME: CatalogField = CatalogField::builtin("DATA_NAME", 403);
pub const DATA_REPL_NUM: CatalogField = CatalogField::builtin("DATA_REPL_NUM", 404);
pub const DATA_VERSION: CatalogField = CatalogField::builtin("DATA_VERSION", 405);
pub const DATA_TYPE_NAME: CatalogField = CatalogField::builtin("DATA_TYPE_NAME", 406);
pub const DATA_SIZE: CatalogField = CatalogField::builtin("DATA_SIZE", 407);
pub const DATA_RESC_GROUP_NAME: CatalogField = CatalogField::builtin("DATA_RESC_GROUP_NAME", 408);
pub const DATA_RESC_NAME: CatalogField = CatalogField::builtin("DATA_RESC_NAME", 409);
pub const DATA_PATH: CatalogField = CatalogField::builtin("DATA_PATH", 410);
pub const DATA_OWNER_NAME: CatalogField = CatalogField::builtin("DATA_OWNER_NAME", 411);
pub const DATA_OWNER_ZONE: CatalogField = CatalogField::builtin("DATA_OWNER_ZONE", 412);
pub const DATA_REPL_STATUS: CatalogField = CatalogField::builtin("DATA_REPL_STATUS", 413);
pub const DATA_STATUS: CatalogField = CatalogField::builtin("DATA_STATUS", 414);
pub const DATA_CHECKSUM: CatalogField = CatalogField::builtin("DATA_CHECKSUM", 415);
pub const DATA_EXPIRY: CatalogField = CatalogField::builtin("DATA_EXPIRY", 416);
pub const DATA_MAP_ID: CatalogField = CatalogField::builtin("DATA_MAP_ID", 417);
pub const DATA_COMMENTS: CatalogField = CatalogField::builtin("DATA_COMMENTS", 418);
pub const DATA_CREATE_TIME: CatalogField = CatalogField::builtin("DATA_CREATE_TIME", 419);
pub const DATA_MODIFY_TIME: CatalogField = CatalogField::builtin("DATA_MODIFY_TIME", 420);
pub const DATA_MODE: CatalogField = CatalogField::builtin("DATA_MODE", 421);

// Collections
pub const COLL_ID: CatalogField = CatalogField::builtin("COLL_ID", 500);
pub const COLL_NAME: CatalogField = CatalogField::builtin("COLL_NAME", 501);
pub const COLL_PARENT_NAME: CatalogField = CatalogField::builtin("COLL_PARENT_NAME", 502);
pub const COLL_OWNER_NAME: CatalogField = CatalogField::builtin("COLL_OWNER_NAME", 503);
pub const COLL_OWNER_ZONE: CatalogField = CatalogField::builtin("COLL_OWNER_ZONE", 504);
pub const COLL_MAP_ID: CatalogField = CatalogField::builtin("COLL_MAP_ID", 505);
pub const COLL_INHERITANCE: CatalogField = CatalogField::builtin("COLL_INHERITANCE", 506);
pub const COLL_COMMENTS: CatalogField = CatalogField::builtin("COLL_COMMENTS", 507);
pub const COLL_CREATE_TIME: CatalogField = CatalogField::builtin("COLL_CREATE_TIME", 508);
pub const COLL_MODIFY_TIME: CatalogField = CatalogField::builtin("COLL_MODIFY_TIME", 509);
pub const COLL_TYPE: CatalogField = CatalogField::builtin("COLL_TYPE", 510);
pub const COLL_INFO1: CatalogField = CatalogField::builtin("COLL_INFO1", 511);
pub const COLL_INFO2: CatalogField = CatalogField::builtin("COLL_INFO2", 512);

// AVU metadata on data objects
pub const META_DATA_ATTR_NAME: CatalogField = CatalogField::builtin("META_DATA_ATTR_NAME", 600);
pub const META_DATA_ATTR_VALUE: CatalogField = CatalogField::builtin("META_DATA_ATTR_VALUE", 601);
pub const META_DATA_ATTR_UNITS: CatalogField = CatalogField::builtin("META_DATA_ATTR_UNITS", 602);
pub const META_DATA_ATTR_ID: CatalogField = CatalogField::builtin("META_DATA_ATTR_ID", 603);

// AVU metadata on collections
pub const META_COLL_ATTR_NAME: CatalogField = CatalogField::builtin("META_COLL_ATTR_NAME", 610);
pub const META_COLL_ATTR_VALUE: CatalogField = CatalogField::builtin("META_COLL_ATTR_VALUE", 611);
pub const META_COLL_ATTR_UNITS: CatalogField = CatalogField::builtin("META_COLL_ATTR_UNITS", 612);
pub const META_COLL_ATTR_ID: CatalogField = CatalogField::builtin("META_COLL_ATTR_ID", 613);

// AVU metadata on resources
pub const META_RESC_ATTR_NAME: CatalogField = CatalogField::builtin("META_RESC_ATTR_NAME", 630);
pub const META_RESC_ATTR_VALUE: CatalogField = CatalogField::builtin("META_RESC_ATTR_VALUE", 631);
pub const META_RESC_ATTR_UNITS: CatalogField = CatalogField::builtin("META_RESC_ATTR_UNITS", 632);
pub const META_RESC_ATTR_ID: CatalogField = CatalogField::builtin("META_RESC_ATTR_ID", 633);

// AVU metadata on users
pub const META_USER_ATTR_NAME: CatalogField = CatalogField::builtin("META_USER_ATTR_NAME", 640);
pub const META_USER_ATTR_VALUE: CatalogField = CatalogField::builtin("META_USER_ATTR_VALUE", 641);
pub const META_USER_ATTR_UNITS: CatalogField = CatalogField::builtin("META_USER_ATTR_UNITS", 642);
pub const META_USER_ATTR_ID: CatalogField = CatalogField::builtin("META_USER_ATTR_ID", 643);

// Access control
pub const DATA_ACCESS_TYPE: CatalogField = CatalogField::builtin("DATA_ACCESS_TYPE", 700);
pub const DATA_ACCESS_NAME: CatalogField = CatalogField::builtin("DATA_ACCESS_NAME", 701);
pub const DATA_TOKEN_NAMESPACE: CatalogField = CatalogField::builtin("DATA_TOKEN_NAMESPACE", 702);
pub const DATA_ACCESS_USER_ID: CatalogField = CatalogField::builtin("DATA_ACCESS_USER_ID", 703);
pub const DATA_ACCESS_DATA_ID: CatalogField = CatalogField::builtin("DATA_ACCESS_DATA_ID", 704);
pub const COLL_ACCESS_TYPE: CatalogField = CatalogField::builtin("COLL_ACCESS_TYPE", 710);
pub const COLL_ACCESS_NAME: CatalogField = CatalogField::builtin("COLL_ACCESS_NAME", 711);
pub const COLL_TOKEN_NAMESPACE: CatalogField = CatalogField::builtin("COLL_TOKEN_NAMESPACE", 712);
pub const COLL_ACCESS_USER_ID: CatalogField = CatalogField::builtin("COLL_ACCESS_USER_ID", 713);
pub const COLL_ACCESS_COLL_ID: CatalogField = CatalogField::builtin("COLL_ACCESS_COLL_ID", 714);

// Groups
pub const USER_GROUP_ID: CatalogField = CatalogField::builtin("USER_GROUP_ID", 900);
pub const USER_GROUP_NAME: CatalogField = CatalogField::builtin("USER_GROUP_NAME", 901);

/// Every builtin column, in code order.
pub static ALL: &[CatalogField] = &[
    ZONE_ID,
    ZONE_NAME,
    ZONE_TYPE,
    ZONE_CONNECTION,
    ZONE_COMMENT,
    USER_ID,
    USER_NAME,
    USER_TYPE,
    USER_ZONE,
    USER_INFO,
    USER_COMMENT,
    USER_CREATE_TIME,
    USER_MODIFY_TIME,
    RESC_ID,
    RESC_NAME,
    RESC_ZONE_NAME,
    RESC_TYPE_NAME,
    RESC_CLASS_NAME,
    RESC_LOC,
    RESC_VAULT_PATH,
    RESC_FREE_SPACE,
    RESC_INFO,
    RESC_COMMENT,
    RESC_CREATE_TIME,
    RESC_MODIFY_TIME,
    RESC_STATUS,
    RESC_FREE_SPACE_TIME,
    DATA_ID,
    DATA_COLL_ID,
    DATA_NAME,
    DATA_REPL_NUM,
    DATA_VERSION,
    DATA_TYPE_NAME,
    DATA_SIZE,
    DATA_RESC_GROUP_NAME,
    DATA_RESC_NAME,
    DATA_PATH,
    DATA_OWNER_NAME,
    DATA_OWNER_ZONE,
    DATA_REPL_STATUS,
    DATA_STATUS,
    DATA_CHECKSUM,
    DATA_EXPIRY,
    DATA_MAP_ID,
    DATA_COMMENTS,
    DATA_CREATE_TIME,
    DATA_MODIFY_TIME,
    DATA_MODE,
    COLL_ID,
    COLL_NAME,
    COLL_PARENT_NAME,
    COLL_OWNER_NAME,
    COLL_OWNER_ZONE,
    COLL_MAP_ID,
    COLL_INHERITANCE,
    COLL_COMMENTS,
    COLL_CREATE_TIME,
    COLL_MODIFY_TIME,
    COLL_TYPE,
    COLL_INFO1,
    COLL_INFO2,
    META_DATA_ATTR_NAME,
    META_DATA_ATTR_VALUE,
    META_DATA_ATTR_UNITS,
    META_DATA_ATTR_ID,
    META_COLL_ATTR_NAME,
    META_COLL_ATTR_VALUE,
    META_COLL_ATTR_UNITS,
    META_COLL_ATTR_ID,
    META_RESC_ATTR_NAME,
    META_RESC_ATTR_VALUE,
    META_RESC_ATTR_UNITS,
    META_RESC_ATTR_ID,
    META_USER_ATTR_NAME,
    META_USER_ATTR_VALUE,
    META_USER_ATTR_UNITS,
    META_USER_ATTR_ID,
    DATA_ACCESS_TYPE,
    DATA_ACCESS_NAME,
    DATA_TOKEN_NAMESPACE,
    DATA_ACCESS_USER_ID,
    DATA_ACCESS_DATA_ID,
    COLL_ACCESS_TYPE,
    COLL_ACCESS_NAME,
    COLL_TOKEN_NAMESPACE,
    COLL_ACCESS_USER_ID,
    COLL_ACCESS_COLL_ID,
    USER_GROUP_ID,
    USER_GROUP_NAME,
];
