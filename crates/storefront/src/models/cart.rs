//! Session-stored shopping cart.

use electromart_core::{CartLineId, CurrencyCode, Price, ProductHandle, ShippingMethod};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::components::QuantityBounds;

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub product: ProductHandle,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub image_url: String,
    pub product_url: String,
    /// "Color: Midnight Black, Size: M/L".
    pub variant: Option<String>,
}

impl CartLine {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// What to add: a product plus its chosen variant and quantity.
#[derive(Debug, Clone)]
pub struct NewLine<'a> {
    pub product: &'a Product,
    pub variant: Option<String>,
    pub quantity: u32,
}

/// Ordered cart lines plus the next line id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line: u32,
}

impl Cart {
    /// The demo cart new sessions start with.
    #[must_use]
    pub fn demo(catalog: &Catalog) -> Self {
        let bounds = QuantityBounds::default();
        let mut cart = Self::default();
        if let Some(watch) = catalog.get("p123") {
            cart.add(
                NewLine {
                    product: watch,
                    variant: Some("Color: Midnight Black, Size: M/L".to_string()),
                    quantity: 1,
                },
                bounds,
            );
        }
        if let Some(headphones) = catalog.get("fp1") {
            cart.add(
                NewLine {
                    product: headphones,
                    variant: None,
                    quantity: 2,
                },
                bounds,
            );
        }
        cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id.as_str() == id)
    }

    /// Currency of the cart (USD when empty).
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.lines
            .first()
            .map_or_else(CurrencyCode::default, |l| l.unit_price.currency_code)
    }

    /// Total number of units across lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        Price::sum(self.lines.iter().map(CartLine::line_total), self.currency())
    }

    /// Shipping for `method`; free when the cart is empty.
    #[must_use]
    pub fn shipping(&self, method: ShippingMethod) -> Price {
        if self.is_empty() {
            Price::zero(self.currency())
        } else {
            method.cost(self.currency())
        }
    }

    /// Subtotal plus shipping for `method`.
    #[must_use]
    pub fn total(&self, method: ShippingMethod) -> Price {
        self.subtotal().plus(self.shipping(method))
    }

    /// Add units of a product variant.
    ///
    /// A line for the same product and variant absorbs the new units; the
    /// merged quantity is clamped to `bounds`. Returns a copy of the
    /// affected line.
    pub fn add(&mut self, new: NewLine<'_>, bounds: QuantityBounds) -> CartLine {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product == new.product.handle && l.variant == new.variant)
        {
            line.quantity = bounds.clamp(i64::from(line.quantity) + i64::from(new.quantity));
            return line.clone();
        }

        self.next_line += 1;
        let line = CartLine {
            id: CartLineId::new(format!("cart{}", self.next_line)),
            product: new.product.handle.clone(),
            name: new.product.name.clone(),
            unit_price: new.product.price,
            quantity: bounds.clamp(i64::from(new.quantity)),
            image_url: new.product.primary_image_url().to_string(),
            product_url: new.product.url(),
            variant: new.variant,
        };
        self.lines.push(line.clone());
        line
    }

    /// Replace a line's quantity, clamped to `bounds`.
    ///
    /// Returns the stored quantity, or `None` for an unknown line.
    pub fn set_quantity(&mut self, id: &str, quantity: i64, bounds: QuantityBounds) -> Option<u32> {
        let line = self.lines.iter_mut().find(|l| l.id.as_str() == id)?;
        line.quantity = bounds.clamp(quantity);
        Some(line.quantity)
    }

    /// Remove a line. Returns the removed line, if it existed.
    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.id.as_str() == id)?;
        Some(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
