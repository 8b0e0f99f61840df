//! Routing definitions for the console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/khachhang")]
    Customers,
    #[at("/khachhang/create")]
    CustomerCreate,
    #[at("/khachhang/edit/:id")]
    CustomerEdit { id: String },
    #[at("/spdv")]
    Products,
    #[at("/spdv/create")]
    ProductCreate,
    #[at("/spdv/edit/:id")]
    ProductEdit { id: String },
    #[at("/spdv/:id")]
    ProductDetail { id: String },
    #[at("/banggia")]
    PriceLists,
    #[at("/banggia/create")]
    PriceListCreate,
    #[at("/banggia/edit/:id")]
    PriceListEdit { id: String },
    #[at("/dinhmucck")]
    Discounts,
    #[at("/dinhmucck/create")]
    DiscountCreate,
    #[at("/dinhmucck/edit/:maspdv/:date")]
    DiscountEdit { maspdv: String, date: String },
    #[at("/hoadon")]
    Invoices,
    #[at("/hoadon/create")]
    InvoiceCreate,
    #[at("/hoadon/:id")]
    InvoiceDetail { id: String },
    #[at("/phieugiamgia")]
    Vouchers,
    #[at("/phieugiamgia/create")]
    VoucherCreate,
    #[at("/phieugiamgia/:id")]
    VoucherDetail { id: String },
    #[at("/tkkt")]
    Accounts,
    #[at("/tkkt/create")]
    AccountCreate,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes reachable without a session.
    pub(crate) const fn is_public(&self) -> bool {
        matches!(self, Self::Login)
    }
}
