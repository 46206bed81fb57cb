//! Invoice rendering
//!
//! Pure and deterministic: the same order and line items always produce a
//! byte-identical document. Line order is preserved from the stored array,
//! amounts are whole shillings with a fixed "Ksh." prefix, and dates use a
//! fixed day/month/year format so output never depends on host locale.

use std::fmt::Write;

use chrono::DateTime;

use shared::models::Order;

/// Human-facing invoice number: first 8 characters of the order id, uppercased
pub fn invoice_number(order_id: &str) -> String {
    order_id.chars().take(8).collect::<String>().to_uppercase()
}

/// Subject line for the invoice email
pub fn invoice_subject(order: &Order) -> String {
    format!("Invoice for Your Order #{}", invoice_number(&order.id))
}

/// Format an amount in whole Kenyan shillings
fn ksh(amount: i64) -> String {
    format!("Ksh. {amount}")
}

/// Render the order date as dd/mm/yyyy; falls back to the date part of the
/// raw timestamp if it is not valid RFC 3339
fn order_date(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => created_at.chars().take(10).collect(),
    }
}

/// Render the full HTML invoice for an order
pub fn render_html(order: &Order) -> String {
    let mut items_html = String::new();
    for item in &order.order_items {
        // write! into a String cannot fail
        let _ = write!(
            items_html,
            r#"
    <tr style="border-bottom: 1px solid #e5e5e5;">
      <td style="padding: 12px; text-align: left;">{name} ({size})</td>
      <td style="padding: 12px; text-align: center;">{quantity}</td>
      <td style="padding: 12px; text-align: right;">{unit}</td>
      <td style="padding: 12px; text-align: right;">{line_total}</td>
    </tr>"#,
            name = item.product_name,
            size = item.size,
            quantity = item.quantity,
            unit = ksh(item.unit_price),
            line_total = ksh(item.subtotal()),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Casina Farms Invoice</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; color: #333; }}
    .header {{ text-align: center; margin-bottom: 30px; }}
    .invoice-info {{ margin-bottom: 30px; }}
    .customer-info {{ background: #f9f9f9; padding: 20px; margin-bottom: 30px; }}
    .items-table {{ width: 100%; border-collapse: collapse; margin-bottom: 30px; }}
    .items-table th {{ background: #2d5016; color: white; padding: 12px; text-align: left; }}
    .total-row {{ background: #f0f0f0; font-weight: bold; }}
    .footer {{ text-align: center; margin-top: 40px; color: #666; }}
  </style>
</head>
<body>
  <div class="header">
    <h1 style="color: #2d5016; margin: 0;">CASINA FARMS</h1>
    <p style="color: #8b4513; margin: 5px 0;">Building Resilience on the Kenyan Coast</p>
    <h2 style="color: #2d5016;">INVOICE</h2>
  </div>

  <div class="invoice-info">
    <p><strong>Invoice #:</strong> {invoice_no}</p>
    <p><strong>Order Date:</strong> {date}</p>
    <p><strong>Payment Method:</strong> {payment}</p>
  </div>

  <div class="customer-info">
    <h3 style="margin-top: 0; color: #2d5016;">Customer Information</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Delivery Address:</strong> {address}</p>
  </div>

  <table class="items-table">
    <thead>
      <tr>
        <th>Product</th>
        <th style="text-align: center;">Quantity</th>
        <th style="text-align: right;">Unit Price</th>
        <th style="text-align: right;">Total</th>
      </tr>
    </thead>
    <tbody>{items}
      <tr class="total-row">
        <td colspan="3" style="padding: 12px; text-align: right;">TOTAL AMOUNT:</td>
        <td style="padding: 12px; text-align: right;">{total}</td>
      </tr>
    </tbody>
  </table>

  <div class="footer">
    <p>Thank you for choosing Casina Farms!</p>
    <p>For inquiries, contact us at info@casinafarms.com</p>
    <p style="font-size: 12px;">This is an automated invoice. Please keep this for your records.</p>
  </div>
</body>
</html>
"#,
        invoice_no = invoice_number(&order.id),
        date = order_date(&order.created_at),
        payment = order.payment_method.as_str().to_uppercase(),
        name = order.customer_name,
        email = order.customer_email,
        phone = order.customer_phone,
        address = order.delivery_address,
        items = items_html,
        total = ksh(order.total_amount),
    )
}
