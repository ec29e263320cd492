//! Page layout: a fixed grid filled first-fit, row by row from the top left.

use log::debug;

use crate::item::Item;
use crate::{Result, SorterError};

pub const DEFAULT_COLUMNS: u8 = 10;
pub const DEFAULT_ROWS: u8 = 10;

/// Outcome of offering an item to a page.
#[derive(Debug)]
pub enum Insertion {
    Placed { x: u8, y: u8 },
    /// No anchor has room; the item is handed back untouched.
    NoRoom(Item),
}

#[derive(Debug)]
pub struct Page {
    columns: u8,
    rows: u8,
    /// Index into `items` for every occupied cell, row-major.
    cells: Vec<Option<usize>>,
    items: Vec<Item>,
}

impl Page {
    pub fn new(columns: u8, rows: u8) -> Self {
        Page {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
            items: Vec::new(),
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item covering cell (x, y), if any.
    pub fn occupant(&self, x: u8, y: u8) -> Option<&Item> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.cells[self.cell(x, y)].map(|idx| &self.items[idx])
    }

    fn cell(&self, x: u8, y: u8) -> usize {
        y as usize * self.columns as usize + x as usize
    }

    fn fits(&self, x: u8, y: u8, width: u8, height: u8) -> bool {
        if x as usize + width as usize > self.columns as usize
            || y as usize + height as usize > self.rows as usize
        {
            return false;
        }
        (y..y + height).all(|row| (x..x + width).all(|col| self.cells[self.cell(col, row)].is_none()))
    }

    fn find_anchor(&self, width: u8, height: u8) -> Option<(u8, u8)> {
        if width == 0 || height == 0 {
            return None;
        }
        for y in 0..self.rows {
            for x in 0..self.columns {
                if self.fits(x, y, width, height) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Place `item` at the first free anchor and patch its position.
    pub fn insert_item(&mut self, mut item: Item) -> Result<Insertion> {
        let (x, y) = match self.find_anchor(item.width, item.height) {
            Some(anchor) => anchor,
            None => return Ok(Insertion::NoRoom(item)),
        };

        item.set_position(x, y)?;
        let idx = self.items.len();
        for row in y..y + item.height {
            for col in x..x + item.width {
                let cell = self.cell(col, row);
                self.cells[cell] = Some(idx);
            }
        }
        debug!("placed {} at ({x}, {y})", item.code);
        self.items.push(item);
        Ok(Insertion::Placed { x, y })
    }
}

/// Lay out groups onto pages: every group starts on a fresh page, and a
/// page that cannot take the next item is closed and replaced.
pub fn layout(groups: Vec<Vec<Item>>, columns: u8, rows: u8) -> Result<Vec<Page>> {
    let mut pages = Vec::new();

    for group in groups {
        let mut page = Page::new(columns, rows);
        for item in group {
            let item = match page.insert_item(item)? {
                Insertion::Placed { .. } => continue,
                Insertion::NoRoom(item) => item,
            };
            if page.is_empty() {
                return Err(too_large(&item));
            }
            pages.push(std::mem::replace(&mut page, Page::new(columns, rows)));
            if let Insertion::NoRoom(item) = page.insert_item(item)? {
                return Err(too_large(&item));
            }
        }
        if !page.is_empty() {
            pages.push(page);
        }
    }

    Ok(pages)
}

fn too_large(item: &Item) -> SorterError {
    SorterError::ItemTooLarge {
        code: item.code.clone(),
        width: item.width,
        height: item.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::{item, ItemSpec};

    fn items(code: &'static str, n: usize) -> Vec<Item> {
        (0..n).map(|_| item(&ItemSpec::simple(code))).collect()
    }

    #[test]
    fn fills_rows_from_the_top_left() {
        let mut page = Page::new(10, 10);
        let mut anchors = Vec::new();
        for rune in items("r01", 11) {
            match page.insert_item(rune).unwrap() {
                Insertion::Placed { x, y } => anchors.push((x, y)),
                Insertion::NoRoom(_) => panic!("a 10x10 page holds eleven runes"),
            }
        }
        let expected: Vec<(u8, u8)> = (0..10).map(|x| (x, 0)).chain([(0, 1)]).collect();
        assert_eq!(anchors, expected);
        assert_eq!(page.items()[10].position(), (0, 1));
        assert_eq!(page.occupant(9, 0).map(|i| i.code.as_str()), Some("r01"));
        assert!(page.occupant(1, 1).is_none());
    }

    #[test]
    fn overflow_leaves_earlier_items_in_place() {
        let mut page = Page::new(10, 10);
        for spear in items("spr", 10) {
            assert!(matches!(page.insert_item(spear).unwrap(), Insertion::Placed { .. }));
        }
        let before: Vec<(u8, u8)> = page.items().iter().map(Item::position).collect();

        let extra = item(&ItemSpec::simple("spr"));
        match page.insert_item(extra).unwrap() {
            Insertion::NoRoom(returned) => assert_eq!(returned.position(), (0, 0)),
            Insertion::Placed { .. } => panic!("no 2x4 gap should be left"),
        }
        let after: Vec<(u8, u8)> = page.items().iter().map(Item::position).collect();
        assert_eq!(before, after);
        assert_eq!(page.len(), 10);
        assert_eq!(after[5], (0, 4));
    }

    #[test]
    fn taller_items_skip_blocked_anchors() {
        let mut page = Page::new(4, 4);
        page.insert_item(item(&ItemSpec::simple("r01").at(5, 5))).unwrap();
        let tall = item(&ItemSpec::simple("tbk"));
        assert!(matches!(page.insert_item(tall).unwrap(), Insertion::Placed { x: 1, y: 0 }));
        let wide = item(&ItemSpec::simple("box"));
        assert!(matches!(page.insert_item(wide).unwrap(), Insertion::Placed { x: 2, y: 0 }));
        let belt = item(&ItemSpec::simple("lbl"));
        assert!(matches!(page.insert_item(belt).unwrap(), Insertion::Placed { x: 0, y: 2 }));
    }

    #[test]
    fn layout_opens_pages_per_group_and_on_overflow() {
        let groups = vec![items("r01", 101), items("gpr", 2)];
        let pages = layout(groups, 10, 10).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 100);
        assert_eq!(pages[1].len(), 1);
        assert_eq!(pages[1].items()[0].position(), (0, 0));
        assert_eq!(pages[2].items()[1].position(), (1, 0));
    }

    #[test]
    fn layout_rejects_items_larger_than_a_page() {
        let groups = vec![items("uar", 1)];
        let err = layout(groups, 2, 2).unwrap_err();
        assert!(matches!(
            err,
            SorterError::ItemTooLarge { width: 2, height: 3, .. }
        ));
    }

    #[test]
    fn empty_groups_produce_no_pages() {
        let pages = layout(vec![Vec::new(), items("r02", 1)], 10, 10).unwrap();
        assert_eq!(pages.len(), 1);
    }
}
