//! In-memory host objects for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec3;
use st_core::Bounds;
use uuid::Uuid;

use crate::error::{HostError, Result};
use crate::object::{HostObject, HostScene, InstanceId, MethodInfo, ObjectRef};
use crate::value::HostValue;

pub(crate) struct TestObject {
    id: InstanceId,
    name: String,
    dead: Cell<bool>,
    fields: RefCell<HashMap<String, HostValue>>,
    methods: RefCell<Vec<MethodInfo>>,
    parent: RefCell<Option<ObjectRef>>,
    position: Cell<Option<Vec3>>,
    colliders: RefCell<Vec<Bounds>>,
    attached: RefCell<Vec<ObjectRef>>,
    invoke_results: RefCell<HashMap<String, HostValue>>,
    failing_methods: RefCell<Vec<String>>,
    calls: RefCell<Vec<(String, Vec<HostValue>)>>,
}

impl TestObject {
    pub fn named(name: &str) -> Rc<TestObject> {
        Rc::new(TestObject {
            id: Uuid::new_v4(),
            name: name.to_string(),
            dead: Cell::new(false),
            fields: RefCell::new(HashMap::new()),
            methods: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
            position: Cell::new(None),
            colliders: RefCell::new(Vec::new()),
            attached: RefCell::new(Vec::new()),
            invoke_results: RefCell::new(HashMap::new()),
            failing_methods: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn put(&self, member: &str, value: HostValue) {
        self.fields.borrow_mut().insert(member.to_string(), value);
    }

    pub fn add_method(&self, name: &str, takes_int: bool) {
        self.methods.borrow_mut().push(MethodInfo {
            name: name.to_string(),
            takes_int,
        });
    }

    pub fn set_parent(&self, parent: ObjectRef) {
        *self.parent.borrow_mut() = Some(parent);
    }

    pub fn set_position(&self, position: Vec3) {
        self.position.set(Some(position));
    }

    pub fn add_collider(&self, bounds: Bounds) {
        self.colliders.borrow_mut().push(bounds);
    }

    pub fn attach(&self, child: ObjectRef) {
        self.attached.borrow_mut().push(child);
    }

    pub fn set_invoke_result(&self, method: &str, value: HostValue) {
        self.invoke_results
            .borrow_mut()
            .insert(method.to_string(), value);
    }

    pub fn fail_method(&self, method: &str) {
        self.failing_methods.borrow_mut().push(method.to_string());
    }

    pub fn kill(&self) {
        self.dead.set(true);
    }

    pub fn calls(&self) -> Vec<(String, Vec<HostValue>)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(name, _)| name == method)
            .count()
    }

    pub fn field(&self, member: &str) -> Option<HostValue> {
        self.fields.borrow().get(member).cloned()
    }
}

impl HostObject for TestObject {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_dead(&self) -> bool {
        self.dead.get()
    }

    fn get(&self, member: &str) -> Option<HostValue> {
        if self.dead.get() {
            return None;
        }
        self.fields.borrow().get(member).cloned()
    }

    fn set(&self, member: &str, value: HostValue) -> bool {
        if self.dead.get() {
            return false;
        }
        let mut fields = self.fields.borrow_mut();
        if !fields.contains_key(member) {
            return false;
        }
        fields.insert(member.to_string(), value);
        true
    }

    fn invoke(&self, method: &str, args: &[HostValue]) -> Result<HostValue> {
        if self.dead.get() {
            return Err(HostError::Invocation(format!("{} is destroyed", self.name)));
        }
        if self.failing_methods.borrow().iter().any(|m| m == method) {
            return Err(HostError::Invocation(format!("{method} exploded")));
        }
        self.calls
            .borrow_mut()
            .push((method.to_string(), args.to_vec()));
        Ok(self
            .invoke_results
            .borrow()
            .get(method)
            .cloned()
            .unwrap_or(HostValue::Nil))
    }

    fn methods(&self) -> Vec<MethodInfo> {
        self.methods.borrow().clone()
    }

    fn position(&self) -> Option<Vec3> {
        self.position.get()
    }

    fn parent(&self) -> Option<ObjectRef> {
        self.parent.borrow().clone()
    }

    fn collider_bounds(&self) -> Vec<Bounds> {
        self.colliders.borrow().clone()
    }

    fn attached(&self) -> Vec<ObjectRef> {
        self.attached.borrow().clone()
    }
}

#[derive(Default)]
pub(crate) struct TestScene {
    pub root: RefCell<Option<ObjectRef>>,
    pub net: RefCell<Option<ObjectRef>>,
    pub surface: RefCell<Option<ObjectRef>>,
    pub live: RefCell<Vec<ObjectRef>>,
    pub assets: RefCell<Vec<ObjectRef>>,
    pub active: RefCell<Vec<InstanceId>>,
}

impl HostScene for TestScene {
    fn scene_root(&self) -> Option<ObjectRef> {
        self.root.borrow().clone()
    }

    fn network_manager(&self) -> Option<ObjectRef> {
        self.net.borrow().clone()
    }

    fn notice_surface(&self) -> Option<ObjectRef> {
        self.surface.borrow().clone()
    }

    fn find_entities(&self) -> Vec<ObjectRef> {
        self.live.borrow().clone()
    }

    fn all_entity_assets(&self) -> Vec<ObjectRef> {
        self.assets.borrow().clone()
    }

    fn in_active_scene(&self, obj: &ObjectRef) -> bool {
        self.active.borrow().contains(&obj.id())
    }
}
