use crate::model::{DraftView, ItemKey, LineItem, RowChange};
use std::collections::HashMap;

/// One change to apply to the rendered table.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOp<H> {
    /// Show the line-item section; sent before the first row is appended.
    Reveal,
    Append { handle: H, line: LineItem },
    UpdateInPlace { handle: H, line: LineItem },
    Remove { handle: H },
    /// Hide the line-item section; sent after the last row is removed.
    Collapse,
}

/// Row handles keyed by line identity.
///
/// `H` is the front end's row handle; `new_handle` mints one for each appended row.
pub struct RowRegistry<H, F = fn(ItemKey) -> H> {
    rows: HashMap<ItemKey, H>,
    new_handle: F,
}

impl<H, F> RowRegistry<H, F>
where
    H: Clone,
    F: FnMut(ItemKey) -> H,
{
    pub fn new(new_handle: F) -> Self {
        Self {
            rows: HashMap::new(),
            new_handle,
        }
    }

    pub fn handle(&self, key: ItemKey) -> Option<&H> {
        self.rows.get(&key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row operations for a view returned by a draft mutation.
    ///
    /// The view's [`RowChange`] names the touched row. If the registry has drifted
    /// from the view (for example the first view it sees), it falls back to a full
    /// [`reconcile`](Self::reconcile).
    pub fn apply(&mut self, view: &DraftView) -> Vec<RowOp<H>> {
        match view.change {
            RowChange::Appended(key) if !self.rows.contains_key(&key) => match view.line(key) {
                Some(line) => {
                    let mut ops = Vec::with_capacity(2);
                    if self.rows.is_empty() {
                        ops.push(RowOp::Reveal);
                    }
                    ops.push(self.append(line));
                    ops
                }
                None => self.reconcile(view),
            },
            RowChange::Updated(key) => {
                if let (Some(handle), Some(line)) = (self.rows.get(&key).cloned(), view.line(key)) {
                    return vec![RowOp::UpdateInPlace {
                        handle,
                        line: line.clone(),
                    }];
                }
                self.reconcile(view)
            }
            RowChange::Removed { key, now_empty } => match self.rows.remove(&key) {
                Some(handle) => {
                    let mut ops = vec![RowOp::Remove { handle }];
                    if now_empty && self.rows.is_empty() {
                        ops.push(RowOp::Collapse);
                    }
                    ops
                }
                None => self.reconcile(view),
            },
            _ => self.reconcile(view),
        }
    }

    /// Brings the registry in line with `view` from scratch: removes rows with no line,
    /// appends rows for new lines and refreshes the rest.
    pub fn reconcile(&mut self, view: &DraftView) -> Vec<RowOp<H>> {
        let was_empty = self.rows.is_empty();
        let mut ops = Vec::new();

        let stale: Vec<ItemKey> = self
            .rows
            .keys()
            .filter(|key| view.line(**key).is_none())
            .copied()
            .collect();
        for key in stale {
            if let Some(handle) = self.rows.remove(&key) {
                ops.push(RowOp::Remove { handle });
            }
        }

        if was_empty && !view.items.is_empty() {
            ops.push(RowOp::Reveal);
        }
        for line in &view.items {
            match self.rows.get(&line.key) {
                Some(handle) => ops.push(RowOp::UpdateInPlace {
                    handle: handle.clone(),
                    line: line.clone(),
                }),
                None => ops.push(self.append(line)),
            }
        }

        if !was_empty && view.items.is_empty() {
            ops.push(RowOp::Collapse);
        }
        ops
    }

    fn append(&mut self, line: &LineItem) -> RowOp<H> {
        let handle = (self.new_handle)(line.key);
        self.rows.insert(line.key, handle.clone());
        RowOp::Append {
            handle,
            line: line.clone(),
        }
    }
}

impl RowRegistry<String> {
    /// Registry whose handles are row element ids such as `row-product-1`.
    pub fn with_dom_ids() -> Self {
        fn dom_id(key: ItemKey) -> String {
            format!("row-{key}")
        }
        RowRegistry::new(dom_id as fn(ItemKey) -> String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CatalogEntry, DiscountInput, DraftId, InvoiceDraft, ProductId, ServiceId,
    };
    use rust_decimal_macros::dec;

    fn ring() -> CatalogEntry {
        CatalogEntry {
            key: ItemKey::product(ProductId(1)),
            name: "Ring".into(),
            unit_price: dec!(100),
            available_quantity: Some(5),
        }
    }

    fn polish() -> CatalogEntry {
        CatalogEntry {
            key: ItemKey::service(ServiceId(1)),
            name: "Polish".into(),
            unit_price: dec!(50),
            available_quantity: None,
        }
    }

    #[test]
    fn first_append_reveals_then_merges_update_in_place() {
        let mut draft = InvoiceDraft::new(DraftId(1));
        let mut rows = RowRegistry::with_dom_ids();

        let change = draft.add_entry(ring(), 1).unwrap();
        let ops = rows.apply(&draft.view(change));
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], RowOp::Reveal);
        assert!(matches!(&ops[1], RowOp::Append { handle, .. } if handle == "row-product-1"));

        let change = draft.add_entry(ring(), 2).unwrap();
        let ops = rows.apply(&draft.view(change));
        match &ops[..] {
            [RowOp::UpdateInPlace { handle, line }] => {
                assert_eq!(handle, "row-product-1");
                assert_eq!(line.quantity, 3);
            }
            other => panic!("expected one in-place update, got {other:?}"),
        }
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn removing_last_row_collapses() {
        let mut draft = InvoiceDraft::new(DraftId(1));
        let mut rows = RowRegistry::with_dom_ids();
        for entry in [ring(), polish()] {
            let change = draft.add_entry(entry, 1).unwrap();
            rows.apply(&draft.view(change));
        }

        let change = draft.remove_item(ItemKey::product(ProductId(1)));
        assert_eq!(
            rows.apply(&draft.view(change)),
            vec![RowOp::Remove {
                handle: "row-product-1".to_string()
            }]
        );

        let change = draft.remove_item(ItemKey::service(ServiceId(1)));
        assert_eq!(
            rows.apply(&draft.view(change)),
            vec![
                RowOp::Remove {
                    handle: "row-service-1".to_string()
                },
                RowOp::Collapse
            ]
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn discount_changes_refresh_rows_without_structure_changes() {
        let mut draft = InvoiceDraft::new(DraftId(1));
        let mut rows = RowRegistry::new(|key: ItemKey| key.id);
        let change = draft.add_entry(ring(), 1).unwrap();
        rows.apply(&draft.view(change));

        let change = draft.set_discount(&DiscountInput::from("10"));
        let ops = rows.apply(&draft.view(change));
        assert!(ops
            .iter()
            .all(|op| matches!(op, RowOp::UpdateInPlace { handle: 1, .. })));
    }

    #[test]
    fn reconcile_catches_up_a_fresh_registry() {
        let mut draft = InvoiceDraft::new(DraftId(1));
        draft.add_entry(ring(), 2).unwrap();
        draft.add_entry(polish(), 1).unwrap();

        let mut counter = 0u32;
        let mut rows = RowRegistry::new(move |_key: ItemKey| {
            counter += 1;
            counter
        });
        let ops = rows.reconcile(&draft.view(RowChange::Totals));
        assert_eq!(ops[0], RowOp::Reveal);
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, RowOp::Append { .. }))
                .count(),
            2
        );
        assert_eq!(rows.handle(ItemKey::service(ServiceId(1))), Some(&2));
    }
}
