#![allow(dead_code)]

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use structeq_core::reflect_struct;

/// A named record with a member-valued collection
pub struct Tagged {
    pub name: String,
    pub tags: Vec<String>,
}

reflect_struct!(Tagged {
    properties { name: String, tags: Vec<String> }
});

pub fn tagged(name: &str, tags: &[&str]) -> Tagged {
    Tagged {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub struct Wide {
    pub a: i32,
    pub b: String,
}

reflect_struct!(Wide {
    properties { a: i32, b: String }
});

pub struct Narrow {
    pub a: i32,
}

reflect_struct!(Narrow {
    properties { a: i32 }
});

pub struct Unrelated {
    pub z: bool,
}

reflect_struct!(Unrelated {
    properties { z: bool }
});

/// Same member name as `Narrow`, declared with a wider type
pub struct NarrowWide {
    pub a: i64,
}

reflect_struct!(NarrowWide {
    properties { a: i64 }
});

/// Properties plus a field that only counts when fields are included
pub struct Account {
    pub id: u32,
    pub owner: String,
    pub balance: i64,
    pub notes: String,
}

reflect_struct!(Account {
    properties { id: u32, owner: String, balance: i64 }
    fields { notes: String }
});

pub fn account(id: u32, balance: i64, notes: &str) -> Account {
    Account {
        id,
        owner: "ada".to_string(),
        balance,
        notes: notes.to_string(),
    }
}

/// A composite nested inside a member collection
pub struct Team {
    pub title: String,
    pub members: Vec<Tagged>,
}

reflect_struct!(Team {
    properties { title: String, members: Vec<Tagged> }
});

/// Self-reference through a lazily set cell
pub struct Node {
    pub value: i32,
    pub next: OnceCell<Rc<Node>>,
}

reflect_struct!(Node {
    properties { value: i32, next: OnceCell<Rc<Node>> }
});

/// `a.next = a`
pub fn self_loop(value: i32) -> Rc<Node> {
    let node = Rc::new(Node {
        value,
        next: OnceCell::new(),
    });
    let _ = node.next.set(Rc::clone(&node));
    node
}

/// `a.next = b`, `b.next = a`
pub fn ring(first: i32, second: i32) -> Rc<Node> {
    let a = Rc::new(Node {
        value: first,
        next: OnceCell::new(),
    });
    let b = Rc::new(Node {
        value: second,
        next: OnceCell::new(),
    });
    let _ = a.next.set(Rc::clone(&b));
    let _ = b.next.set(Rc::clone(&a));
    a
}

/// Self-reference through a weak pointer
pub struct Link {
    pub value: i32,
    pub next: Weak<Link>,
}

reflect_struct!(Link {
    properties { value: i32, next: Weak<Link> }
});

pub fn weak_loop(value: i32) -> Rc<Link> {
    Rc::new_cyclic(|me| Link {
        value,
        next: me.clone(),
    })
}

/// Self-reference through interior mutability
pub struct Chain {
    pub value: i32,
    pub next: RefCell<Option<Rc<Chain>>>,
}

reflect_struct!(Chain {
    properties { value: i32, next: RefCell<Option<Rc<Chain>>> }
});

pub fn refcell_loop(value: i32) -> Rc<Chain> {
    let cell = Rc::new(Chain {
        value,
        next: RefCell::new(None),
    });
    *cell.next.borrow_mut() = Some(Rc::clone(&cell));
    cell
}

/// Parent/children tree with back pointers
pub struct TreeNode {
    pub label: String,
    pub parent: RefCell<Weak<TreeNode>>,
    pub children: RefCell<Vec<Rc<TreeNode>>>,
}

reflect_struct!(TreeNode {
    properties {
        label: String,
        parent: RefCell<Weak<TreeNode>>,
        children: RefCell<Vec<Rc<TreeNode>>>,
    }
});

pub fn tree(root: &str, children: &[&str]) -> Rc<TreeNode> {
    let parent = Rc::new(TreeNode {
        label: root.to_string(),
        parent: RefCell::new(Weak::new()),
        children: RefCell::new(Vec::new()),
    });
    for label in children {
        let child = Rc::new(TreeNode {
            label: label.to_string(),
            parent: RefCell::new(Rc::downgrade(&parent)),
            children: RefCell::new(Vec::new()),
        });
        parent.children.borrow_mut().push(child);
    }
    parent
}
