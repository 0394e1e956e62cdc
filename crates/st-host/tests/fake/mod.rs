//! In-memory host used by the integration suites.
//!
//! `Obj` is a string-keyed member bag with liveness, parents, colliders,
//! and per-method behaviors; `Scene` wires a handful of them into the
//! singleton and scan accessors. `wire_display` installs the host side of
//! the display call: prefix hook, cue emission through the pre-emission
//! veto, text write, postfix hook: the shape the real host's interception
//! sites have.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec3;
use st_core::Bounds;
use uuid::Uuid;

use st_host::{
    HookRegistry, HostError, HostObject, HostScene, HostValue, InstanceId, MethodInfo, ObjectRef,
    Result, SceneRef,
};

type Behavior = Box<dyn Fn(&[HostValue]) -> HostValue>;

pub struct Obj {
    id: InstanceId,
    name: String,
    dead: Cell<bool>,
    fields: RefCell<HashMap<String, HostValue>>,
    methods: RefCell<Vec<MethodInfo>>,
    behaviors: RefCell<HashMap<String, Behavior>>,
    failing: RefCell<Vec<String>>,
    parent: RefCell<Option<ObjectRef>>,
    position: Cell<Option<Vec3>>,
    colliders: RefCell<Vec<Bounds>>,
    attached: RefCell<Vec<ObjectRef>>,
    calls: RefCell<Vec<(String, Vec<HostValue>)>>,
}

impl Obj {
    pub fn named(name: &str) -> Rc<Obj> {
        Rc::new(Obj {
            id: Uuid::new_v4(),
            name: name.to_string(),
            dead: Cell::new(false),
            fields: RefCell::new(HashMap::new()),
            methods: RefCell::new(Vec::new()),
            behaviors: RefCell::new(HashMap::new()),
            failing: RefCell::new(Vec::new()),
            parent: RefCell::new(None),
            position: Cell::new(None),
            colliders: RefCell::new(Vec::new()),
            attached: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn put(&self, member: &str, value: HostValue) {
        self.fields.borrow_mut().insert(member.to_string(), value);
    }

    pub fn field(&self, member: &str) -> Option<HostValue> {
        self.fields.borrow().get(member).cloned()
    }

    pub fn text_of(&self, member: &str) -> String {
        self.field(member)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    pub fn add_method(&self, name: &str, takes_int: bool) {
        self.methods.borrow_mut().push(MethodInfo {
            name: name.to_string(),
            takes_int,
        });
    }

    pub fn behavior(&self, method: &str, behavior: impl Fn(&[HostValue]) -> HostValue + 'static) {
        self.behaviors
            .borrow_mut()
            .insert(method.to_string(), Box::new(behavior));
    }

    pub fn fail_method(&self, method: &str) {
        self.failing.borrow_mut().push(method.to_string());
    }

    pub fn clear_failure(&self, method: &str) {
        self.failing.borrow_mut().retain(|m| m != method);
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

    pub fn kill(&self) {
        self.dead.set(true);
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(name, _)| name == method)
            .count()
    }
}

impl HostObject for Obj {
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
        if self.failing.borrow().iter().any(|m| m == method) {
            return Err(HostError::Invocation(format!("{method} exploded")));
        }
        self.calls
            .borrow_mut()
            .push((method.to_string(), args.to_vec()));
        let behaviors = self.behaviors.borrow();
        Ok(match behaviors.get(method) {
            Some(behavior) => behavior(args),
            None => HostValue::Nil,
        })
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
pub struct Scene {
    pub root: RefCell<Option<ObjectRef>>,
    pub net: RefCell<Option<ObjectRef>>,
    pub surface: RefCell<Option<ObjectRef>>,
    pub live: RefCell<Vec<ObjectRef>>,
    pub assets: RefCell<Vec<ObjectRef>>,
    pub active: RefCell<Vec<InstanceId>>,
}

impl HostScene for Scene {
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

/// One notice surface and its parts.
pub struct SurfaceRig {
    pub surface: Rc<Obj>,
    pub text: Rc<Obj>,
    pub container: Rc<Obj>,
    pub fade: Rc<Obj>,
    pub channel: Rc<Obj>,
}

pub fn build_surface() -> SurfaceRig {
    let fade = Obj::named("FadeControl");
    fade.put("opacity", HostValue::Num(0.0));

    let container = Obj::named("NoticeBackground");
    container.put("active", HostValue::Bool(true));
    container.put("fadeControl", HostValue::Obj(fade.clone()));

    let text = Obj::named("NoticeText");
    text.put("text", HostValue::Str(String::new()));
    text.put("opacity", HostValue::Num(0.0));

    let channel = Obj::named("NoticeAudio");
    channel.add_method("play", false);

    let surface = Obj::named("NoticeSurface");
    surface.put("noticeText", HostValue::Obj(text.clone()));
    surface.put("noticeBackground", HostValue::Obj(container.clone()));
    surface.put("noticeAudio", HostValue::Obj(channel.clone()));
    surface.put("autoHideTask", HostValue::Nil);

    SurfaceRig {
        surface,
        text,
        container,
        fade,
        channel,
    }
}

/// Everything a test scenario needs in one place.
pub struct World {
    pub scene: Rc<Scene>,
    pub scene_ref: SceneRef,
    pub root: Rc<Obj>,
    pub ship: Rc<Obj>,
    pub player: Rc<Obj>,
    pub rig: SurfaceRig,
    pub ambient: Rc<Obj>,
    pub suppressed: Rc<Cell<usize>>,
}

pub fn build_world() -> World {
    let ship = Obj::named("HangarShip");
    ship.set_position(Vec3::ZERO);
    ship.add_collider(Bounds::from_center_size(Vec3::ZERO, Vec3::splat(10.0)));

    let player = Obj::named("LocalPlayer");
    player.put("isLocalPlayer", HostValue::Bool(true));
    player.put("IsOwner", HostValue::Bool(true));
    player.put("isInHangarShipRoom", HostValue::Bool(true));
    player.put("isInShipRoom", HostValue::Bool(true));

    let root = Obj::named("SceneRoot");
    root.put("shipRoom", HostValue::Obj(ship.clone()));
    root.put("localPlayerController", HostValue::Obj(player.clone()));

    let rig = build_surface();
    let ambient = Obj::named("AmbientAudio");
    ambient.add_method("play", false);

    let scene = Rc::new(Scene::default());
    *scene.root.borrow_mut() = Some(root.clone() as ObjectRef);
    *scene.surface.borrow_mut() = Some(rig.surface.clone() as ObjectRef);

    let scene_ref: SceneRef = scene.clone();
    World {
        scene,
        scene_ref,
        root,
        ship,
        player,
        rig,
        ambient,
        suppressed: Rc::new(Cell::new(0)),
    }
}

impl World {
    /// Register an entity as live and in the active scene.
    pub fn spawn(&self, entity: &Rc<Obj>) {
        self.scene.live.borrow_mut().push(entity.clone() as ObjectRef);
        self.scene.active.borrow_mut().push(entity.id());
    }
}

/// A collectible with the full member shape, aboard by flag.
pub fn scrap_entity(name: &str, value: i64) -> Rc<Obj> {
    let props = Obj::named("ItemProperties");
    props.put("isScrap", HostValue::Bool(true));
    props.put("scrapValue", HostValue::Int(value));

    let entity = Obj::named(name);
    entity.put("itemProperties", HostValue::Obj(props));
    entity.put("scrapValue", HostValue::Int(value));
    entity.put("isHeld", HostValue::Bool(false));
    entity.put("isPocketed", HostValue::Bool(false));
    entity.put("playerHeldBy", HostValue::Nil);
    entity.put("isInShipRoom", HostValue::Bool(true));
    entity.put("isInElevator", HostValue::Bool(false));
    entity.set_position(Vec3::ZERO);
    entity.add_method("EquipItem", false);
    entity.add_method("SyncScrapValueClientRpc", true);
    entity
}

/// Install the host side of the display call on a surface: prefix hook,
/// cue and ambient emissions through the pre-emission veto, text write,
/// postfix hook on every path.
pub fn wire_display(
    rig: &SurfaceRig,
    ambient: &Rc<Obj>,
    suppressed: &Rc<Cell<usize>>,
    registry: HookRegistry,
) {
    let text = rig.text.clone();
    let channel = rig.channel.clone();
    let ambient = ambient.clone();
    let suppressed = suppressed.clone();

    rig.surface.behavior("display", move |args| {
        registry.display_prefix();

        let channel_ref = channel.clone() as ObjectRef;
        if registry.before_emission(&channel_ref) {
            let _ = channel.invoke("play", &[]);
        } else {
            suppressed.set(suppressed.get() + 1);
        }

        // An unrelated emission fires during the same call.
        let ambient_ref = ambient.clone() as ObjectRef;
        if registry.before_emission(&ambient_ref) {
            let _ = ambient.invoke("play", &[]);
        }

        if let Some(body) = args.first().and_then(|v| v.as_str()) {
            text.put("text", HostValue::Str(body.to_string()));
        }

        registry.display_postfix();
        HostValue::Nil
    });
}
