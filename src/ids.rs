//! USB vendor/product ids of the panels with a built-in class assignment.

pub const VENDOR_HANVON: u16 = 0x20b3;
pub const PRODUCT_HANVON_MULTITOUCH: u16 = 0x0a18;

pub const VENDOR_CANDO: u16 = 0x2087;
pub const PRODUCT_CANDO_PIXCIR_MULTI_TOUCH: u16 = 0x0703;
pub const PRODUCT_CANDO_MULTI_TOUCH: u16 = 0x0a01;
pub const PRODUCT_CANDO_MULTI_TOUCH_11_6: u16 = 0x0b03;

pub const VENDOR_CYPRESS: u16 = 0x04b4;
pub const PRODUCT_CYPRESS_TRUETOUCH: u16 = 0xc001;

pub const VENDOR_ASUS: u16 = 0x0486;
pub const PRODUCT_ASUS_T91MT: u16 = 0x0185;
pub const PRODUCT_ASUSTEK_MULTITOUCH_YFO: u16 = 0x0186;
